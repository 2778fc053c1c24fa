//! Core library for the Pantry recipe generator.
//!
//! Pantry turns a list of ingredients into a recipe with the help of a
//! language model, keeps every generated recipe in a local SQLite database
//! and offers favorites, a shopping list and a step-by-step cooking mode.
//!
//! - [`kitchen`]: the async application API front ends use
//! - [`generator`]: prompt construction, response parsing and the Gemini client
//! - [`db`]: the SQLite store
//! - [`session`]: the cooking mode state machine and its driver
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pantry_core::{GeminiGenerator, KitchenBuilder, params::GenerateRecipe};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("pantry.db"))
//!     .with_generator(Arc::new(GeminiGenerator::new("api-key")))
//!     .build()
//!     .await?;
//!
//! let recipe = kitchen
//!     .generate_recipe(&GenerateRecipe {
//!         ingredients: "eggs, spinach, feta".to_string(),
//!         filters: None,
//!     })
//!     .await?;
//! println!("{recipe}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod kitchen;
pub mod models;
pub mod params;
pub mod session;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, FavoriteRecipes, LocalDateTime, OperationStatus, RecipeHistory,
    ShoppingListExport, ShoppingListView,
};
pub use error::{PantryError, Result};
pub use generator::{GeminiGenerator, RecipeGenerator, RecipeRequest};
pub use kitchen::{Kitchen, KitchenBuilder};
pub use models::{
    DietaryFilter, DietaryFilters, NewRecipe, Preferences, Recipe, RecipeSummary, ShoppingEntry,
    ShoppingItem,
};
pub use params::{CheckItem, ExportShoppingList, GenerateRecipe, Id, ListHistory, UpdatePreferences};
pub use session::{CookingSession, SessionError, SessionEvent, SessionInput};
