//! Builder for creating and configuring Kitchen instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{PantryError, Result},
    generator::RecipeGenerator,
};

/// Builder for creating and configuring Kitchen instances.
#[derive(Clone, Default)]
pub struct KitchenBuilder {
    database_path: Option<PathBuf>,
    generator: Option<Arc<dyn RecipeGenerator>>,
}

impl KitchenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pantry/pantry.db` or `~/.local/share/pantry/pantry.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generator used by `generate_recipe`. Without one, generation
    /// fails with a configuration error asking for an API key.
    pub fn with_generator(mut self, generator: Arc<dyn RecipeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Builds the configured kitchen, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `PantryError::FileSystem` if the database directory cannot be created
    /// Returns `PantryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Kitchen> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PantryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PantryError>(())
        })
        .await
        .map_err(PantryError::join)??;

        Ok(Kitchen::new(db_path, self.generator))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pantry")
            .place_data_file("pantry.db")
            .map_err(|e| PantryError::XdgDirectory(e.to_string()))
    }
}
