//! Pantry CLI Application
//!
//! Command-line interface for generating, keeping and cooking recipes.

mod args;
mod cli;
mod cooking;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use pantry_core::{params::ListHistory, GeminiGenerator, KitchenBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        model,
        api_base_url,
        command,
    } = Args::parse();

    let mut builder = KitchenBuilder::new().with_database_path(database_file);

    match api_key.filter(|key| !key.trim().is_empty()) {
        Some(key) => {
            let mut generator = GeminiGenerator::new(key).with_model(model);
            if let Some(base_url) = api_base_url {
                generator = generator.with_base_url(base_url);
            }
            debug!("Recipe generation enabled with model {}", generator.model());
            builder = builder.with_generator(Arc::new(generator));
        }
        None => debug!("No API key configured; recipe generation disabled"),
    }

    let kitchen = builder
        .build()
        .await
        .context("Failed to initialize pantry")?;

    let color = kitchen
        .preferences()
        .await
        .context("Failed to read preferences")?
        .color;
    let renderer = TerminalRenderer::new(color && !no_color);

    info!("Pantry started");

    let cli = Cli::new(kitchen, renderer);
    match command {
        Some(Generate(args)) => cli.generate(args).await,
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(History(args)) => cli.history(&args.into()).await,
        Some(Favorite { command }) => cli.handle_favorite_command(command).await,
        Some(Shopping { command }) => cli.handle_shopping_command(command).await,
        Some(Settings { command }) => cli.handle_settings_command(command).await,
        Some(Cook(args)) => cli.cook(args).await,
        None => cli.history(&ListHistory::default()).await,
    }
}
