//! Recipe model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored recipe. Recipes never change after creation; they can only be
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Name of the dish
    pub name: String,

    /// Preparation time as free text, e.g. "15 minutes"
    pub prep_time: String,

    /// Cooking time as free text
    pub cook_time: String,

    /// Ingredients in the order they were given
    pub ingredients: Vec<String>,

    /// Instructions in cooking order
    pub instructions: Vec<String>,

    /// Timestamp when the recipe was stored (UTC)
    pub created_at: Timestamp,
}

/// A recipe that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
