//! Data models for recipes and everything kept around them.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation out of the data
//! definitions.

pub mod dietary;
pub mod preferences;
pub mod recipe;
pub mod shopping;
pub mod summary;

pub use dietary::{DietaryFilter, DietaryFilters};
pub use preferences::Preferences;
pub use recipe::{NewRecipe, Recipe};
pub use shopping::{ShoppingEntry, ShoppingItem};
pub use summary::RecipeSummary;
