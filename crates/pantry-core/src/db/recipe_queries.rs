//! Recipe CRUD operations and the history query.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, list_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PantryError, Result},
    models::{NewRecipe, Recipe, RecipeSummary},
};

const INSERT_RECIPE_SQL: &str = "INSERT INTO recipes (name, prep_time, cook_time, ingredients, instructions, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_RECIPE_SQL: &str = "SELECT id, name, prep_time, cook_time, ingredients, instructions, created_at FROM recipes WHERE id = ?1";
const CHECK_RECIPE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?1)";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";
const SELECT_HISTORY_SQL: &str = "SELECT r.id, r.name, r.created_at, f.recipe_id IS NOT NULL FROM recipes r LEFT JOIN favorites f ON f.recipe_id = r.id ORDER BY r.id DESC LIMIT ?1";

impl super::Database {
    fn build_recipe_from_row(row: &Row) -> rusqlite::Result<Recipe> {
        Ok(Recipe {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            prep_time: row.get(2)?,
            cook_time: row.get(3)?,
            ingredients: list_column(row, 4)?,
            instructions: list_column(row, 5)?,
            created_at: timestamp_column(row, 6)?,
        })
    }

    pub(super) fn build_summary_from_row(row: &Row) -> rusqlite::Result<RecipeSummary> {
        Ok(RecipeSummary {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            created_at: timestamp_column(row, 2)?,
            favorite: row.get(3)?,
        })
    }

    /// Stores a new recipe and returns it with its assigned ID.
    pub fn create_recipe(&mut self, recipe: &NewRecipe) -> Result<Recipe> {
        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let instructions = serde_json::to_string(&recipe.instructions)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_RECIPE_SQL,
            params![
                recipe.name,
                recipe.prep_time,
                recipe.cook_time,
                ingredients,
                instructions,
                now.to_string()
            ],
        )
        .db_context("Failed to insert recipe")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Recipe {
            id,
            name: recipe.name.clone(),
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            created_at: now,
        })
    }

    /// Retrieves a recipe by its ID.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        self.connection
            .query_row(SELECT_RECIPE_SQL, params![id as i64], Self::build_recipe_from_row)
            .optional()
            .db_context("Failed to query recipe")
    }

    /// Retrieves a recipe, failing with `RecipeNotFound` if it is missing.
    pub fn require_recipe(&self, id: u64) -> Result<Recipe> {
        self.get_recipe(id)?
            .ok_or(PantryError::RecipeNotFound { id })
    }

    /// Whether a recipe with this ID exists.
    pub fn recipe_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_RECIPE_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check recipe existence")
    }

    /// Most recently created recipes first, at most `limit` of them.
    ///
    /// IDs are assigned in creation order, so they order the history.
    pub fn recipe_history(&self, limit: u32) -> Result<Vec<RecipeSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_HISTORY_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![i64::from(limit)], Self::build_summary_from_row)
            .db_context("Failed to query recipe history")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recipe history")?;

        Ok(summaries)
    }

    /// Permanently deletes a recipe. Its favorite marker goes with it;
    /// shopping list entries keep the recipe name.
    pub fn delete_recipe(&mut self, id: u64) -> Result<Recipe> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let recipe = tx
            .query_row(SELECT_RECIPE_SQL, params![id as i64], Self::build_recipe_from_row)
            .optional()
            .db_context("Failed to query recipe")?
            .ok_or(PantryError::RecipeNotFound { id })?;

        tx.execute(DELETE_RECIPE_SQL, params![id as i64])
            .db_context("Failed to delete recipe")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(recipe)
    }
}
