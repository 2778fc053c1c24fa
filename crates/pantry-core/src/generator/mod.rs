//! Recipe generation through a language model.
//!
//! [`RecipeGenerator`] is the seam between the application and the model
//! provider. [`GeminiGenerator`] talks to Google's Generative Language API;
//! tests substitute their own implementations.
//!
//! A generator builds the prompt with [`build_prompt`], sends it, and turns
//! the reply into a [`NewRecipe`] with [`parse_recipe_response`].

use async_trait::async_trait;

use crate::{error::Result, models::{DietaryFilters, NewRecipe}};

pub mod gemini;
pub mod prompt;
pub mod response;

pub use gemini::GeminiGenerator;
pub use prompt::build_prompt;
pub use response::parse_recipe_response;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    /// Free-form ingredient text, already trimmed and non-empty
    pub ingredients: String,
    /// Dietary requirements the recipe must meet
    pub filters: DietaryFilters,
}

/// Produces a recipe from a request.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generates one recipe. A single attempt; failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns `PantryError::Generation` when the provider fails or its
    /// reply cannot be read as a recipe.
    async fn generate(&self, request: &RecipeRequest) -> Result<NewRecipe>;
}
