//! Error types for the pantry library.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionError;

/// Comprehensive error type for all pantry operations.
#[derive(Error, Debug)]
pub enum PantryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Recipe not found for the given ID
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: u64 },
    /// Shopping list item not found for the given ID
    #[error("Shopping list item with ID {id} not found")]
    ShoppingItemNotFound { id: u64 },
    /// The shopping list has nothing to export
    #[error("Your shopping list is empty")]
    EmptyShoppingList,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The recipe generator failed or returned something unusable
    #[error("Recipe generation failed: {message}")]
    Generation { message: String },
    /// A cooking session rejected an input
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PantryError {
        PantryError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PantryError {
        PantryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PantryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error from any displayable message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PantryError::database(message).with_source(e))
    }
}

/// Result type alias for pantry operations
pub type Result<T> = std::result::Result<T, PantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PantryError::invalid_input("ingredients").with_reason("Please enter some ingredients");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'ingredients': Please enter some ingredients"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query recipe").unwrap_err();
        assert!(matches!(err, PantryError::Database { .. }));
        assert!(err.to_string().contains("Failed to query recipe"));
    }

    #[test]
    fn test_session_errors_pass_through() {
        let err: PantryError = SessionError::InvalidDuration {
            input: "abc".to_string(),
        }
        .into();
        assert!(err.to_string().contains("abc"));
    }
}
