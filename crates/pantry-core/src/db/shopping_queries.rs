//! Shopping list storage.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PantryError, Result},
    models::{ShoppingEntry, ShoppingItem},
};

const INSERT_ENTRY_SQL: &str =
    "INSERT INTO shopping_entries (recipe_id, recipe_name, created_at) VALUES (?1, ?2, ?3)";
const INSERT_ITEM_SQL: &str =
    "INSERT INTO shopping_items (entry_id, ingredient, checked, position) VALUES (?1, ?2, 0, ?3)";
const SELECT_ENTRIES_SQL: &str =
    "SELECT id, recipe_id, recipe_name, created_at FROM shopping_entries ORDER BY id";
const SELECT_ITEMS_SQL: &str =
    "SELECT id, entry_id, ingredient, checked FROM shopping_items ORDER BY entry_id, position";
const SELECT_ITEM_SQL: &str =
    "SELECT id, entry_id, ingredient, checked FROM shopping_items WHERE id = ?1";
const UPDATE_ITEM_CHECKED_SQL: &str = "UPDATE shopping_items SET checked = ?1 WHERE id = ?2";
const DELETE_ITEMS_SQL: &str = "DELETE FROM shopping_items";
const DELETE_ENTRIES_SQL: &str = "DELETE FROM shopping_entries";

impl super::Database {
    fn build_item_from_row(row: &Row) -> rusqlite::Result<ShoppingItem> {
        Ok(ShoppingItem {
            id: id_column(row, 0)?,
            entry_id: id_column(row, 1)?,
            ingredient: row.get(2)?,
            checked: row.get(3)?,
        })
    }

    /// Adds every ingredient of a recipe to the shopping list as one entry.
    pub fn add_to_shopping_list(&mut self, recipe_id: u64) -> Result<ShoppingEntry> {
        let recipe = self.require_recipe(recipe_id)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ENTRY_SQL,
            params![recipe_id as i64, recipe.name, now.to_string()],
        )
        .db_context("Failed to insert shopping list entry")?;
        let entry_id = tx.last_insert_rowid() as u64;

        let mut items = Vec::with_capacity(recipe.ingredients.len());
        for (position, ingredient) in recipe.ingredients.iter().enumerate() {
            tx.execute(
                INSERT_ITEM_SQL,
                params![entry_id as i64, ingredient, position as i64],
            )
            .db_context("Failed to insert shopping list item")?;

            items.push(ShoppingItem {
                id: tx.last_insert_rowid() as u64,
                entry_id,
                ingredient: ingredient.clone(),
                checked: false,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ShoppingEntry {
            id: entry_id,
            recipe_id: Some(recipe_id),
            recipe_name: recipe.name,
            items,
            created_at: now,
        })
    }

    /// The whole shopping list, entries in the order they were added.
    pub fn shopping_list(&self) -> Result<Vec<ShoppingEntry>> {
        let mut entries: BTreeMap<u64, ShoppingEntry> = self
            .connection
            .prepare(SELECT_ENTRIES_SQL)
            .db_context("Failed to prepare query")?
            .query_map([], |row| {
                Ok(ShoppingEntry {
                    id: id_column(row, 0)?,
                    recipe_id: row.get::<_, Option<i64>>(1)?.map(|id| id as u64),
                    recipe_name: row.get(2)?,
                    items: Vec::new(),
                    created_at: timestamp_column(row, 3)?,
                })
            })
            .db_context("Failed to query shopping list")?
            .map(|entry| entry.map(|entry| (entry.id, entry)))
            .collect::<std::result::Result<_, _>>()
            .db_context("Failed to fetch shopping list")?;

        let items = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare query")?
            .query_map([], Self::build_item_from_row)
            .db_context("Failed to query shopping list items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch shopping list items")?;

        for item in items {
            if let Some(entry) = entries.get_mut(&item.entry_id) {
                entry.items.push(item);
            }
        }

        Ok(entries.into_values().collect())
    }

    /// Sets whether an item has been picked up.
    pub fn set_item_checked(&mut self, item_id: u64, checked: bool) -> Result<ShoppingItem> {
        let updated = self
            .connection
            .execute(UPDATE_ITEM_CHECKED_SQL, params![checked, item_id as i64])
            .db_context("Failed to update shopping list item")?;

        if updated == 0 {
            return Err(PantryError::ShoppingItemNotFound { id: item_id });
        }

        self.get_shopping_item(item_id)?
            .ok_or(PantryError::ShoppingItemNotFound { id: item_id })
    }

    /// Flips an item's checked state.
    pub fn toggle_item_checked(&mut self, item_id: u64) -> Result<ShoppingItem> {
        let item = self
            .get_shopping_item(item_id)?
            .ok_or(PantryError::ShoppingItemNotFound { id: item_id })?;
        self.set_item_checked(item_id, !item.checked)
    }

    pub fn get_shopping_item(&self, item_id: u64) -> Result<Option<ShoppingItem>> {
        self.connection
            .query_row(SELECT_ITEM_SQL, params![item_id as i64], Self::build_item_from_row)
            .optional()
            .db_context("Failed to query shopping list item")
    }

    /// Empties the shopping list. Returns the number of entries removed.
    pub fn clear_shopping_list(&mut self) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ITEMS_SQL, [])
            .db_context("Failed to delete shopping list items")?;
        let removed = tx
            .execute(DELETE_ENTRIES_SQL, [])
            .db_context("Failed to delete shopping list entries")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }
}
