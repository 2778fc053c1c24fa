//! Kitchen operations that return display wrappers.
//!
//! Front ends print these directly; the plain operations in the sibling
//! modules return the bare models.

use super::Kitchen;
use crate::{
    display::{
        CreateResult, DeleteResult, FavoriteRecipes, OperationStatus, RecipeHistory,
        ShoppingListView,
    },
    error::Result,
    models::{Recipe, ShoppingEntry},
    params::{CheckItem, ExportShoppingList, GenerateRecipe, Id, ListHistory},
};

impl Kitchen {
    /// Generates and stores a recipe, wrapped for display.
    pub async fn generate_recipe_result(
        &self,
        params: &GenerateRecipe,
    ) -> Result<CreateResult<Recipe>> {
        self.generate_recipe(params).await.map(CreateResult::new)
    }

    /// Handle listing the recipe history.
    ///
    /// ```rust,no_run
    /// # use pantry_core::{params::ListHistory, KitchenBuilder};
    /// # async {
    /// let kitchen = KitchenBuilder::new().build().await?;
    /// let history = kitchen.recipe_history_view(&ListHistory { limit: Some(5) }).await?;
    /// println!("{history}");
    /// # Result::<(), pantry_core::PantryError>::Ok(())
    /// # };
    /// ```
    pub async fn recipe_history_view(&self, params: &ListHistory) -> Result<RecipeHistory> {
        self.recipe_history(params).await.map(RecipeHistory)
    }

    /// Handle permanently deleting a recipe, returning it for confirmation.
    pub async fn delete_recipe_result(&self, params: &Id) -> Result<DeleteResult<Recipe>> {
        self.delete_recipe(params).await.map(DeleteResult::new)
    }

    pub async fn favorites_view(&self) -> Result<FavoriteRecipes> {
        self.list_favorites().await.map(FavoriteRecipes)
    }

    /// Toggles a favorite and describes the new state.
    pub async fn toggle_favorite_status(&self, params: &Id) -> Result<OperationStatus> {
        let favorite = self.toggle_favorite(params).await?;
        let message = if favorite {
            format!("Recipe {} added to favorites", params.id)
        } else {
            format!("Recipe {} removed from favorites", params.id)
        };
        Ok(OperationStatus::success(message))
    }

    pub async fn shopping_list_view(&self) -> Result<ShoppingListView> {
        self.shopping_list().await.map(ShoppingListView)
    }

    pub async fn add_to_shopping_list_result(
        &self,
        params: &Id,
    ) -> Result<CreateResult<ShoppingEntry>> {
        self.add_to_shopping_list(params).await.map(CreateResult::new)
    }

    /// Handle checking an item; reports its new state.
    pub async fn check_item_status(&self, params: &CheckItem) -> Result<OperationStatus> {
        let item = self.check_item(params).await?;
        let state = if item.checked { "checked" } else { "unchecked" };
        Ok(OperationStatus::success(format!(
            "Item {} '{}' {state}",
            item.id, item.ingredient
        )))
    }

    pub async fn clear_shopping_list_status(&self) -> Result<OperationStatus> {
        let removed = self.clear_shopping_list().await?;
        Ok(OperationStatus::success(format!(
            "Shopping list cleared ({removed} recipe(s) removed)"
        )))
    }

    pub async fn export_shopping_list_status(
        &self,
        params: &ExportShoppingList,
    ) -> Result<OperationStatus> {
        let count = self.export_shopping_list(params).await?;
        Ok(OperationStatus::success(format!(
            "Exported {count} item(s) to {}",
            params.path.display()
        )))
    }
}
