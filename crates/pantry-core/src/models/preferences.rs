//! Persisted user preferences.

use serde::{Deserialize, Serialize};

use super::DietaryFilters;

/// Settings kept between runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Filters applied to `generate` when none are given explicitly
    pub dietary: DietaryFilters,
    /// Whether terminal output should use colors and markdown styling
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dietary: DietaryFilters::default(),
            color: true,
        }
    }
}
