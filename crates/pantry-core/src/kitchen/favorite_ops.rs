//! Favorite operations for the Kitchen.

use super::Kitchen;
use crate::{error::Result, models::RecipeSummary, params::Id};

impl Kitchen {
    /// Marks a recipe as favorite. Returns `false` if it already was one.
    pub async fn add_favorite(&self, params: &Id) -> Result<bool> {
        let recipe_id = params.id;
        self.with_database(move |db| db.add_favorite(recipe_id)).await
    }

    /// Unmarks a recipe. Returns `false` if it was not a favorite.
    pub async fn remove_favorite(&self, params: &Id) -> Result<bool> {
        let recipe_id = params.id;
        self.with_database(move |db| db.remove_favorite(recipe_id)).await
    }

    /// Flips the favorite marker and returns the new state.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<bool> {
        let recipe_id = params.id;
        self.with_database(move |db| db.toggle_favorite(recipe_id)).await
    }

    pub async fn is_favorite(&self, params: &Id) -> Result<bool> {
        let recipe_id = params.id;
        self.with_database(move |db| db.is_favorite(recipe_id)).await
    }

    /// Favorites in the order they were marked.
    pub async fn list_favorites(&self) -> Result<Vec<RecipeSummary>> {
        self.with_database(|db| db.list_favorites()).await
    }
}
