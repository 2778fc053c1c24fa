//! Plain-text shopping list file format.

use std::fmt;

use crate::models::ShoppingEntry;

/// The shopping list as written by `export_shopping_list`.
///
/// ```text
/// SHOPPING LIST
/// =============
///
/// Pancakes
/// --------
/// [x] flour
/// [ ] milk
///
/// ```
pub struct ShoppingListExport<'a>(pub &'a [ShoppingEntry]);

impl fmt::Display for ShoppingListExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SHOPPING LIST")?;
        writeln!(f, "=============")?;
        writeln!(f)?;

        for entry in self.0 {
            writeln!(f, "{}", entry.recipe_name)?;
            writeln!(f, "{}", "-".repeat(entry.recipe_name.chars().count()))?;
            for item in &entry.items {
                let mark = if item.checked { "[x]" } else { "[ ]" };
                writeln!(f, "{mark} {}", item.ingredient)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
