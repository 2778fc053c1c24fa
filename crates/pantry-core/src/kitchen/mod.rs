//! High-level kitchen API over the recipe store and generator.
//!
//! [`Kitchen`] is what front ends talk to. Every store operation opens the
//! database on a blocking task, does its work and closes it again, so a
//! `Kitchen` is cheap to share and holds no connection between calls.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display       │───▶│ (recipe_ops,    │───▶│   (via db/)     │
//! │   wrappers)     │    │  shopping_ops…) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               │
//!                               ▼
//!                        RecipeGenerator
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pantry_core::{KitchenBuilder, params::ListHistory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("/tmp/pantry.db"))
//!     .build()
//!     .await?;
//!
//! for recipe in kitchen.recipe_history(&ListHistory::default()).await? {
//!     println!("{}: {}", recipe.id, recipe.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use crate::{
    db::Database,
    error::{PantryError, Result},
    generator::RecipeGenerator,
};

pub mod builder;
pub mod favorite_ops;
pub mod handlers;
pub mod preference_ops;
pub mod recipe_ops;
pub mod shopping_ops;


pub use builder::KitchenBuilder;

/// Main application interface for recipes, favorites, shopping and settings.
pub struct Kitchen {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: Option<Arc<dyn RecipeGenerator>>,
}

impl Kitchen {
    pub(crate) fn new(db_path: PathBuf, generator: Option<Arc<dyn RecipeGenerator>>) -> Self {
        Self { db_path, generator }
    }

    /// Path of the database this kitchen works on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether recipes can be generated, i.e. an API key was configured.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Runs `operation` against a freshly opened database on a blocking
    /// thread.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(PantryError::join)?
    }
}
