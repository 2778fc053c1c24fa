//! Favorite markers over recipes.

use jiff::Timestamp;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, PantryError, Result},
    models::RecipeSummary,
};

const INSERT_FAVORITE_SQL: &str =
    "INSERT OR IGNORE INTO favorites (recipe_id, created_at) VALUES (?1, ?2)";
const DELETE_FAVORITE_SQL: &str = "DELETE FROM favorites WHERE recipe_id = ?1";
const CHECK_FAVORITE_SQL: &str = "SELECT EXISTS(SELECT 1 FROM favorites WHERE recipe_id = ?1)";
const SELECT_FAVORITES_SQL: &str = "SELECT r.id, r.name, r.created_at, 1 FROM favorites f JOIN recipes r ON r.id = f.recipe_id ORDER BY f.id";

impl super::Database {
    /// Marks a recipe as favorite. Returns `false` if it already was one.
    pub fn add_favorite(&mut self, recipe_id: u64) -> Result<bool> {
        if !self.recipe_exists(recipe_id)? {
            return Err(PantryError::RecipeNotFound { id: recipe_id });
        }

        let inserted = self
            .connection
            .execute(
                INSERT_FAVORITE_SQL,
                params![recipe_id as i64, Timestamp::now().to_string()],
            )
            .db_context("Failed to add favorite")?;

        Ok(inserted > 0)
    }

    /// Removes a recipe from the favorites. Returns `false` if it was not one.
    pub fn remove_favorite(&mut self, recipe_id: u64) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_FAVORITE_SQL, params![recipe_id as i64])
            .db_context("Failed to remove favorite")?;

        Ok(removed > 0)
    }

    pub fn is_favorite(&self, recipe_id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_FAVORITE_SQL, params![recipe_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check favorite")
    }

    /// Flips the favorite marker and returns the new state.
    pub fn toggle_favorite(&mut self, recipe_id: u64) -> Result<bool> {
        if self.is_favorite(recipe_id)? {
            self.remove_favorite(recipe_id)?;
            Ok(false)
        } else {
            self.add_favorite(recipe_id)?;
            Ok(true)
        }
    }

    /// Favorite recipes in the order they were marked.
    pub fn list_favorites(&self) -> Result<Vec<RecipeSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FAVORITES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], Self::build_summary_from_row)
            .db_context("Failed to query favorites")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch favorites")?;

        Ok(summaries)
    }
}
