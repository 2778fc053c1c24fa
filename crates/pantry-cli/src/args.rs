use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pantry_core::generator::gemini::DEFAULT_MODEL;

use crate::cli::{
    CookArgs, FavoriteCommands, GenerateArgs, HistoryArgs, RecipeCommands, SettingsCommands,
    ShoppingCommands,
};

/// Generate recipes from the ingredients you have, then keep, shop for and
/// cook them.
///
/// Recipes are generated by a Google Gemini model and stored in a local
/// SQLite database together with favorites, a shopping list and your
/// dietary preferences. Running `pantry` without a command shows the
/// recipe history.
#[derive(Parser)]
#[command(version, about, name = "pantry")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pantry/pantry.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Google Gemini API key used by `generate`
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to generate recipes with
    #[arg(long, global = true, env = "PANTRY_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Alternative API endpoint, for testing against a local server
    #[arg(long, global = true, env = "PANTRY_API_BASE_URL", hide = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pantry CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a recipe from ingredients
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show, list and delete stored recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// List recently generated recipes
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Manage favorite recipes
    #[command(alias = "f")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
    /// Manage the shopping list
    #[command(alias = "s")]
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommands,
    },
    /// Show or change saved preferences
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Cook a recipe step by step
    #[command(alias = "c")]
    Cook(CookArgs),
}
