//! SQLite storage for recipes, favorites, the shopping list and preferences.
//!
//! The store is plain CRUD over a single connection. Ingredient and
//! instruction lists are kept as JSON text columns; timestamps as RFC 3339
//! strings produced by `jiff`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod favorite_queries;
pub mod migrations;
pub mod preference_queries;
pub mod recipe_queries;
pub mod shopping_queries;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
