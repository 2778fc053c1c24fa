//! Single-row preference storage.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{DietaryFilters, Preferences},
};

const SELECT_PREFERENCES_SQL: &str =
    "SELECT color, vegetarian, vegan, gluten_free, keto, low_carb FROM preferences WHERE id = 1";
const UPSERT_PREFERENCES_SQL: &str = "INSERT INTO preferences (id, color, vegetarian, vegan, gluten_free, keto, low_carb) VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(id) DO UPDATE SET color = excluded.color, vegetarian = excluded.vegetarian, vegan = excluded.vegan, \
     gluten_free = excluded.gluten_free, keto = excluded.keto, low_carb = excluded.low_carb";

impl super::Database {
    /// Stored preferences, or the defaults if none were ever saved.
    pub fn preferences(&self) -> Result<Preferences> {
        let stored = self
            .connection
            .query_row(SELECT_PREFERENCES_SQL, [], |row| {
                Ok(Preferences {
                    color: row.get(0)?,
                    dietary: DietaryFilters {
                        vegetarian: row.get(1)?,
                        vegan: row.get(2)?,
                        gluten_free: row.get(3)?,
                        keto: row.get(4)?,
                        low_carb: row.get(5)?,
                    },
                })
            })
            .optional()
            .db_context("Failed to query preferences")?;

        Ok(stored.unwrap_or_default())
    }

    /// Replaces the stored preferences.
    pub fn save_preferences(&mut self, preferences: &Preferences) -> Result<()> {
        let dietary = &preferences.dietary;
        self.connection
            .execute(
                UPSERT_PREFERENCES_SQL,
                params![
                    preferences.color,
                    dietary.vegetarian,
                    dietary.vegan,
                    dietary.gluten_free,
                    dietary.keto,
                    dietary.low_carb
                ],
            )
            .db_context("Failed to save preferences")?;

        Ok(())
    }
}
