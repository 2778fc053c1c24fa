//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{RecipeSummary, ShoppingEntry};

/// Newtype wrapper for the recipe history, newest first.
pub struct RecipeHistory(pub Vec<RecipeSummary>);

impl RecipeHistory {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl fmt::Display for RecipeHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes generated yet.")
        } else {
            for recipe in &self.0 {
                write!(f, "{recipe}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for the favorites list.
pub struct FavoriteRecipes(pub Vec<RecipeSummary>);

impl FavoriteRecipes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl fmt::Display for FavoriteRecipes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No favorite recipes yet.")
        } else {
            for recipe in &self.0 {
                write!(f, "{recipe}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for the whole shopping list as markdown.
pub struct ShoppingListView(pub Vec<ShoppingEntry>);

impl ShoppingListView {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of items across all entries.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(|entry| entry.items.len()).sum()
    }
}

impl fmt::Display for ShoppingListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Your shopping list is empty.");
        }

        writeln!(f, "# Shopping List")?;
        writeln!(f)?;
        for entry in &self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
