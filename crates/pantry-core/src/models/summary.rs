//! Summary model used by history and favorites listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Recipe;

/// Lightweight view of a recipe for lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSummary {
    pub id: u64,
    pub name: String,
    pub created_at: Timestamp,
    /// Whether the recipe is in the favorites set
    pub favorite: bool,
}

impl RecipeSummary {
    /// Builds a summary from a full recipe and its favorite flag.
    pub fn from_recipe(recipe: &Recipe, favorite: bool) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            created_at: recipe.created_at,
            favorite,
        }
    }
}
