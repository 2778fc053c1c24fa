//! Display implementations for domain models.
//!
//! All output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    DietaryFilter, Preferences, Recipe, RecipeSummary, ShoppingEntry, ShoppingItem,
};

impl fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- **Prep time**: {}", self.prep_time)?;
        writeln!(f, "- **Cook time**: {}", self.cook_time)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f, "\n## Instructions")?;
        writeln!(f)?;
        for (number, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{}. {instruction}", number + 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.favorite { " ★" } else { "" };

        writeln!(f, "## {} (ID: {}){marker}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        writeln!(f, "- [{mark}] {} (item {})", self.ingredient, self.id)
    }
}

impl fmt::Display for ShoppingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{})",
            self.recipe_name,
            self.checked_count(),
            self.items.len()
        )?;
        writeln!(f)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Color output**: {}",
            if self.color { "on" } else { "off" }
        )?;

        let labels = self.dietary.labels();
        if labels.is_empty() {
            writeln!(f, "- **Dietary filters**: none")
        } else {
            writeln!(f, "- **Dietary filters**: {}", labels.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::DietaryFilters;

    fn recipe() -> Recipe {
        Recipe {
            id: 4,
            name: "Pancakes".to_string(),
            prep_time: "5 minutes".to_string(),
            cook_time: "10 minutes".to_string(),
            ingredients: vec!["flour".to_string(), "milk".to_string()],
            instructions: vec!["Mix".to_string(), "Fry".to_string()],
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_recipe_display_numbers_instructions() {
        let output = recipe().to_string();

        assert!(output.starts_with("# 4. Pancakes\n"));
        assert!(output.contains("- **Prep time**: 5 minutes"));
        assert!(output.contains("- flour\n- milk\n"));
        assert!(output.contains("1. Mix\n2. Fry\n"));
    }

    #[test]
    fn test_summary_marks_favorites() {
        let summary = RecipeSummary::from_recipe(&recipe(), true);
        assert!(summary.to_string().starts_with("## Pancakes (ID: 4) ★"));

        let plain = RecipeSummary::from_recipe(&recipe(), false);
        assert!(plain.to_string().starts_with("## Pancakes (ID: 4)\n"));
    }

    #[test]
    fn test_shopping_entry_shows_progress() {
        let entry = ShoppingEntry {
            id: 1,
            recipe_id: Some(4),
            recipe_name: "Pancakes".to_string(),
            items: vec![
                ShoppingItem {
                    id: 1,
                    entry_id: 1,
                    ingredient: "flour".to_string(),
                    checked: true,
                },
                ShoppingItem {
                    id: 2,
                    entry_id: 1,
                    ingredient: "milk".to_string(),
                    checked: false,
                },
            ],
            created_at: Timestamp::now(),
        };

        let output = entry.to_string();
        assert!(output.starts_with("## Pancakes (1/2)"));
        assert!(output.contains("- [x] flour (item 1)"));
        assert!(output.contains("- [ ] milk (item 2)"));
    }

    #[test]
    fn test_preferences_display() {
        let mut preferences = Preferences::default();
        assert!(preferences.to_string().contains("- **Dietary filters**: none"));

        preferences.dietary = [DietaryFilter::Vegan, DietaryFilter::Keto]
            .into_iter()
            .collect::<DietaryFilters>();
        preferences.color = false;
        let output = preferences.to_string();
        assert!(output.contains("- **Color output**: off"));
        assert!(output.contains("- **Dietary filters**: Vegan, Keto"));
    }
}
