//! Parameter structures for kitchen operations.
//!
//! These are plain data carriers shared by every front end. The CLI defines
//! its own clap-derived argument structs and converts them into these with
//! `From`, so the core stays free of interface dependencies.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ListHistoryArgs {
//!     #[arg(short, long)]
//!     pub limit: Option<u32>,
//! }
//!
//! impl From<ListHistoryArgs> for ListHistory {
//!     fn from(args: ListHistoryArgs) -> Self {
//!         ListHistory { limit: args.limit }
//!     }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{DietaryFilter, DietaryFilters};

/// Number of recipes the history shows when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for generating a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRecipe {
    /// Free-form list of ingredients on hand
    pub ingredients: String,
    /// Dietary filters for this request; `None` uses the stored preferences
    pub filters: Option<DietaryFilters>,
}

/// Parameters for listing recently generated recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListHistory {
    /// Maximum number of recipes to return (defaults to 20)
    pub limit: Option<u32>,
}

impl ListHistory {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}

/// Parameters for ticking off a shopping list item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckItem {
    /// The shopping list item ID
    pub id: u64,
    /// New state; `None` flips the current one
    pub checked: Option<bool>,
}

/// Parameters for writing the shopping list to a text file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportShoppingList {
    /// Destination file; overwritten if it exists
    pub path: PathBuf,
}

/// Changes to apply to the stored preferences.
///
/// Fields left unset keep their stored value. Filters are cleared before
/// `enable` and `disable` are applied when `clear_dietary` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePreferences {
    pub color: Option<bool>,
    pub clear_dietary: bool,
    pub enable: Vec<DietaryFilter>,
    pub disable: Vec<DietaryFilter>,
}

impl UpdatePreferences {
    /// Applies the changes to a filter set.
    pub fn apply_dietary(&self, filters: &mut DietaryFilters) {
        if self.clear_dietary {
            *filters = DietaryFilters::default();
        }
        for filter in &self.enable {
            filters.set(*filter, true);
        }
        for filter in &self.disable {
            filters.set(*filter, false);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && !self.clear_dietary && self.enable.is_empty() && self.disable.is_empty()
    }
}
