//! Recipe operations for the Kitchen.

use log::{debug, info};

use super::Kitchen;
use crate::{
    error::{PantryError, Result},
    generator::RecipeRequest,
    models::{Recipe, RecipeSummary},
    params::{GenerateRecipe, Id, ListHistory},
};

impl Kitchen {
    /// Generates a recipe from the given ingredients and stores it.
    ///
    /// When `params.filters` is `None` the stored dietary preferences apply.
    ///
    /// # Errors
    ///
    /// Returns `PantryError::InvalidInput` if the ingredients are blank,
    /// `PantryError::Configuration` if no generator is configured and
    /// `PantryError::Generation` if the generator fails. Nothing is stored
    /// on failure.
    pub async fn generate_recipe(&self, params: &GenerateRecipe) -> Result<Recipe> {
        let ingredients = params.ingredients.trim();
        if ingredients.is_empty() {
            return Err(PantryError::invalid_input("ingredients")
                .with_reason("Please enter some ingredients"));
        }

        let generator = self.generator.clone().ok_or_else(|| PantryError::Configuration {
            message: "API key required: set GEMINI_API_KEY or pass --api-key".to_string(),
        })?;

        let filters = match params.filters {
            Some(filters) => filters,
            None => self.preferences().await?.dietary,
        };

        let request = RecipeRequest {
            ingredients: ingredients.to_string(),
            filters,
        };
        debug!("Generating recipe with filters {:?}", filters.labels());

        let new_recipe = generator.generate(&request).await?;
        let recipe = self
            .with_database(move |db| db.create_recipe(&new_recipe))
            .await?;

        info!("Stored generated recipe {} '{}'", recipe.id, recipe.name);
        Ok(recipe)
    }

    /// Retrieves a recipe by its ID.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let recipe_id = params.id;
        self.with_database(move |db| db.get_recipe(recipe_id)).await
    }

    /// Retrieves a recipe, failing with `RecipeNotFound` if it is missing.
    pub async fn require_recipe(&self, params: &Id) -> Result<Recipe> {
        let recipe_id = params.id;
        self.with_database(move |db| db.require_recipe(recipe_id)).await
    }

    /// Most recent recipes first.
    pub async fn recipe_history(&self, params: &ListHistory) -> Result<Vec<RecipeSummary>> {
        let limit = params.limit();
        self.with_database(move |db| db.recipe_history(limit)).await
    }

    /// Permanently deletes a recipe and returns what was deleted.
    pub async fn delete_recipe(&self, params: &Id) -> Result<Recipe> {
        let recipe_id = params.id;
        self.with_database(move |db| db.delete_recipe(recipe_id)).await
    }
}
