//! Command argument wrappers and the command handler.
//!
//! Each clap `Args` struct here converts into a plain parameter struct from
//! `pantry_core::params`, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Kitchen
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use pantry_core::{
    display::OperationStatus,
    models::{DietaryFilter, DietaryFilters},
    params::{CheckItem, ExportShoppingList, GenerateRecipe, Id, ListHistory, UpdatePreferences},
    Kitchen, PantryError,
};

use crate::{cooking, renderer::TerminalRenderer};

/// Dietary filter names accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DietaryFilterArg {
    Vegetarian,
    Vegan,
    GlutenFree,
    Keto,
    LowCarb,
}

impl From<DietaryFilterArg> for DietaryFilter {
    fn from(val: DietaryFilterArg) -> Self {
        match val {
            DietaryFilterArg::Vegetarian => DietaryFilter::Vegetarian,
            DietaryFilterArg::Vegan => DietaryFilter::Vegan,
            DietaryFilterArg::GlutenFree => DietaryFilter::GlutenFree,
            DietaryFilterArg::Keto => DietaryFilter::Keto,
            DietaryFilterArg::LowCarb => DietaryFilter::LowCarb,
        }
    }
}

/// Generate a recipe from ingredients
///
/// Without any dietary flag the filters saved with `pantry settings set`
/// apply. Giving at least one flag, or `--no-filters`, replaces them for this
/// request only.
#[derive(Args)]
pub struct GenerateArgs {
    /// Ingredients on hand, e.g. "chicken, rice, garlic"
    #[arg(required = true, num_args = 1..)]
    pub ingredients: Vec<String>,
    #[arg(long, help = "Ask for a vegetarian recipe")]
    pub vegetarian: bool,
    #[arg(long, help = "Ask for a vegan recipe")]
    pub vegan: bool,
    #[arg(long, help = "Ask for a gluten free recipe")]
    pub gluten_free: bool,
    #[arg(long, help = "Ask for a keto recipe")]
    pub keto: bool,
    #[arg(long, help = "Ask for a low carb recipe")]
    pub low_carb: bool,
    /// Ignore saved dietary preferences for this request
    #[arg(long, conflicts_with_all = ["vegetarian", "vegan", "gluten_free", "keto", "low_carb"])]
    pub no_filters: bool,
}

impl From<GenerateArgs> for GenerateRecipe {
    fn from(val: GenerateArgs) -> Self {
        let explicit = DietaryFilters {
            vegetarian: val.vegetarian,
            vegan: val.vegan,
            gluten_free: val.gluten_free,
            keto: val.keto,
            low_carb: val.low_carb,
        };

        let filters = if val.no_filters || !explicit.is_empty() {
            Some(explicit)
        } else {
            None
        };

        GenerateRecipe {
            ingredients: val.ingredients.join(" "),
            filters,
        }
    }
}

/// List recently generated recipes, newest first
#[derive(Args)]
pub struct HistoryArgs {
    #[arg(short, long, help = "Maximum number of recipes to show (default 20)")]
    pub limit: Option<u32>,
}

impl From<HistoryArgs> for ListHistory {
    fn from(val: HistoryArgs) -> Self {
        ListHistory { limit: val.limit }
    }
}

/// Identify a stored recipe
#[derive(Args)]
pub struct RecipeIdArgs {
    #[arg(help = "ID of the recipe")]
    pub id: u64,
}

impl From<RecipeIdArgs> for Id {
    fn from(val: RecipeIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Cook a stored recipe step by step
///
/// Commands are read from standard input, one per line: `n` next step,
/// `p` previous step, `t <minutes>` start or stop a timer, `s` stop the
/// timer, `q` quit.
#[derive(Args)]
pub struct CookArgs {
    #[arg(help = "ID of the recipe to cook")]
    pub id: u64,
}

impl From<CookArgs> for Id {
    fn from(val: CookArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Show a stored recipe
    #[command(alias = "s")]
    Show(RecipeIdArgs),
    /// List recently generated recipes
    #[command(aliases = ["l", "ls"])]
    List(HistoryArgs),
    /// Delete a recipe permanently
    #[command(aliases = ["d", "rm"])]
    Delete(RecipeIdArgs),
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Mark a recipe as favorite
    #[command(alias = "a")]
    Add(RecipeIdArgs),
    /// Remove a recipe from the favorites
    #[command(aliases = ["r", "rm"])]
    Remove(RecipeIdArgs),
    /// Flip a recipe's favorite marker
    #[command(alias = "t")]
    Toggle(RecipeIdArgs),
    /// List favorite recipes
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Tick off a shopping list item
#[derive(Args)]
pub struct CheckItemArgs {
    #[arg(help = "ID of the shopping list item")]
    pub id: u64,
    /// Set the state explicitly instead of flipping it
    #[arg(long, value_name = "BOOL")]
    pub set: Option<bool>,
}

impl From<CheckItemArgs> for CheckItem {
    fn from(val: CheckItemArgs) -> Self {
        CheckItem {
            id: val.id,
            checked: val.set,
        }
    }
}

/// Write the shopping list to a text file
#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "File to write; overwritten if it exists")]
    pub path: PathBuf,
}

impl From<ExportArgs> for ExportShoppingList {
    fn from(val: ExportArgs) -> Self {
        ExportShoppingList { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum ShoppingCommands {
    /// Add a recipe's ingredients to the shopping list
    #[command(alias = "a")]
    Add(RecipeIdArgs),
    /// Show the shopping list
    #[command(aliases = ["l", "ls"])]
    List,
    /// Check or uncheck an item
    #[command(alias = "c")]
    Check(CheckItemArgs),
    /// Remove everything from the shopping list
    Clear,
    /// Export the shopping list as plain text
    #[command(alias = "e")]
    Export(ExportArgs),
}

/// Change saved preferences
#[derive(Args)]
pub struct SetPreferencesArgs {
    /// Use colors and markdown styling in output
    #[arg(long, value_name = "BOOL")]
    pub color: Option<bool>,
    /// Dietary filters to turn on, comma-separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub enable: Vec<DietaryFilterArg>,
    /// Dietary filters to turn off, comma-separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub disable: Vec<DietaryFilterArg>,
    /// Turn all dietary filters off before applying --enable
    #[arg(long)]
    pub clear_dietary: bool,
}

impl From<SetPreferencesArgs> for UpdatePreferences {
    fn from(val: SetPreferencesArgs) -> Self {
        UpdatePreferences {
            color: val.color,
            clear_dietary: val.clear_dietary,
            enable: val.enable.into_iter().map(Into::into).collect(),
            disable: val.disable.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show saved preferences
    Show,
    /// Change saved preferences
    Set(SetPreferencesArgs),
}

/// Runs parsed commands against a kitchen and renders the results.
pub struct Cli {
    kitchen: Kitchen,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(kitchen: Kitchen, renderer: TerminalRenderer) -> Self {
        Self { kitchen, renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = GenerateRecipe::from(args);
        let result = self
            .kitchen
            .generate_recipe_result(&params)
            .await
            .context("Failed to generate recipe")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn history(&self, params: &ListHistory) -> Result<()> {
        let history = self.kitchen.recipe_history_view(params).await?;
        self.renderer.render(&history.to_string())
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Show(args) => {
                let params = Id::from(args);
                let recipe = self
                    .kitchen
                    .get_recipe(&params)
                    .await?
                    .ok_or(PantryError::RecipeNotFound { id: params.id })?;
                self.renderer.render(&recipe.to_string())
            }
            RecipeCommands::List(args) => self.history(&args.into()).await,
            RecipeCommands::Delete(args) => {
                let result = self.kitchen.delete_recipe_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_favorite_command(&self, command: FavoriteCommands) -> Result<()> {
        let status = match command {
            FavoriteCommands::Add(args) => {
                let params = Id::from(args);
                let added = self.kitchen.add_favorite(&params).await?;
                OperationStatus::success(if added {
                    format!("Recipe {} added to favorites", params.id)
                } else {
                    format!("Recipe {} is already a favorite", params.id)
                })
            }
            FavoriteCommands::Remove(args) => {
                let params = Id::from(args);
                let removed = self.kitchen.remove_favorite(&params).await?;
                if removed {
                    OperationStatus::success(format!(
                        "Recipe {} removed from favorites",
                        params.id
                    ))
                } else {
                    OperationStatus::failure(format!("Recipe {} is not a favorite", params.id))
                }
            }
            FavoriteCommands::Toggle(args) => {
                self.kitchen.toggle_favorite_status(&args.into()).await?
            }
            FavoriteCommands::List => {
                let favorites = self.kitchen.favorites_view().await?;
                return self.renderer.render(&favorites.to_string());
            }
        };

        self.renderer.render(&status.to_string())
    }

    pub async fn handle_shopping_command(&self, command: ShoppingCommands) -> Result<()> {
        let output = match command {
            ShoppingCommands::Add(args) => self
                .kitchen
                .add_to_shopping_list_result(&args.into())
                .await?
                .to_string(),
            ShoppingCommands::List => self.kitchen.shopping_list_view().await?.to_string(),
            ShoppingCommands::Check(args) => {
                self.kitchen.check_item_status(&args.into()).await?.to_string()
            }
            ShoppingCommands::Clear => self.kitchen.clear_shopping_list_status().await?.to_string(),
            ShoppingCommands::Export(args) => self
                .kitchen
                .export_shopping_list_status(&args.into())
                .await?
                .to_string(),
        };

        self.renderer.render(&output)
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        let preferences = match command {
            SettingsCommands::Show => self.kitchen.preferences().await?,
            SettingsCommands::Set(args) => {
                let params = UpdatePreferences::from(args);
                if params.is_empty() {
                    anyhow::bail!(
                        "Nothing to change: pass --color, --enable, --disable or --clear-dietary"
                    );
                }
                self.kitchen.update_preferences(&params).await?
            }
        };

        self.renderer.render(&preferences.to_string())
    }

    pub async fn cook(&self, args: CookArgs) -> Result<()> {
        let recipe = self.kitchen.require_recipe(&args.into()).await?;
        cooking::cook(&recipe, &self.renderer).await
    }
}
