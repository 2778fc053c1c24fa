//! Shopping list models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One recipe's ingredients as added to the shopping list.
///
/// Adding the same recipe twice creates two entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingEntry {
    pub id: u64,
    /// Source recipe; `None` once that recipe has been deleted
    pub recipe_id: Option<u64>,
    /// Recipe name at the time the entry was added
    pub recipe_name: String,
    pub items: Vec<ShoppingItem>,
    pub created_at: Timestamp,
}

/// A single ingredient line on the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: u64,
    pub entry_id: u64,
    pub ingredient: String,
    pub checked: bool,
}

impl ShoppingEntry {
    /// Number of items already ticked off.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}
