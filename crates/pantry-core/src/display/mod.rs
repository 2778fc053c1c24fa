//! Display formatting for models and operation results.
//!
//! Models implement [`std::fmt::Display`] directly (see [`models`]) and
//! produce markdown. The wrappers here add context: a list with its empty
//! message, a creation or deletion confirmation, a status line. The CLI
//! renders the markdown through its terminal renderer.
//!
//! [`ShoppingListExport`] is the exception: it produces the plain-text file
//! format written by `shopping export`, not markdown.
//!
//! ```rust
//! use pantry_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Shopping list cleared".to_string());
//! assert_eq!(status.to_string(), "Success: Shopping list cleared\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{FavoriteRecipes, RecipeHistory, ShoppingListView};
pub use datetime::LocalDateTime;
pub use export::ShoppingListExport;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
