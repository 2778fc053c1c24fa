//! Shopping list operations for the Kitchen.

use log::info;
use tokio::task;

use super::Kitchen;
use crate::{
    display::ShoppingListExport,
    error::{PantryError, Result},
    models::{ShoppingEntry, ShoppingItem},
    params::{CheckItem, ExportShoppingList, Id},
};

impl Kitchen {
    /// Adds every ingredient of a recipe to the shopping list.
    pub async fn add_to_shopping_list(&self, params: &Id) -> Result<ShoppingEntry> {
        let recipe_id = params.id;
        self.with_database(move |db| db.add_to_shopping_list(recipe_id))
            .await
    }

    /// All shopping list entries, oldest first.
    pub async fn shopping_list(&self) -> Result<Vec<ShoppingEntry>> {
        self.with_database(|db| db.shopping_list()).await
    }

    /// Sets or flips an item's checked state.
    pub async fn check_item(&self, params: &CheckItem) -> Result<ShoppingItem> {
        let item_id = params.id;
        let checked = params.checked;

        self.with_database(move |db| match checked {
            Some(checked) => db.set_item_checked(item_id, checked),
            None => db.toggle_item_checked(item_id),
        })
        .await
    }

    /// Removes everything from the shopping list. Returns the number of
    /// entries removed.
    pub async fn clear_shopping_list(&self) -> Result<usize> {
        self.with_database(|db| db.clear_shopping_list()).await
    }

    /// Writes the shopping list as plain text and returns how many items
    /// were written.
    ///
    /// # Errors
    ///
    /// Returns `PantryError::EmptyShoppingList` when there is nothing to
    /// export and `PantryError::FileSystem` if the file cannot be written.
    pub async fn export_shopping_list(&self, params: &ExportShoppingList) -> Result<usize> {
        let entries = self.shopping_list().await?;
        if entries.is_empty() {
            return Err(PantryError::EmptyShoppingList);
        }

        let contents = ShoppingListExport(&entries).to_string();
        let item_count = entries.iter().map(|entry| entry.items.len()).sum();
        let path = params.path.clone();

        let written = path.clone();
        task::spawn_blocking(move || {
            std::fs::write(&path, contents).map_err(|e| PantryError::FileSystem { path, source: e })
        })
        .await
        .map_err(PantryError::join)??;

        info!("Exported {item_count} shopping list items to {}", written.display());
        Ok(item_count)
    }
}
