//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Recipe, ShoppingEntry};

/// Wrapper type for displaying the result of create operations.
///
/// Prints a confirmation line with the new ID followed by the resource.
///
/// ```rust
/// use pantry_core::{display::CreateResult, models::Recipe};
/// use jiff::Timestamp;
///
/// let recipe = Recipe {
///     id: 7,
///     name: "Tomato Soup".to_string(),
///     prep_time: "10 minutes".to_string(),
///     cook_time: "25 minutes".to_string(),
///     ingredients: vec!["tomatoes".to_string()],
///     instructions: vec!["Simmer".to_string()],
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(recipe).to_string();
/// assert!(output.starts_with("Created recipe with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created recipe with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ShoppingEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added {} ingredient(s) from '{}' to the shopping list",
            self.resource.items.len(),
            self.resource.recipe_name
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
