//! Preference operations for the Kitchen.

use super::Kitchen;
use crate::{error::Result, models::Preferences, params::UpdatePreferences};

impl Kitchen {
    /// Stored preferences, or defaults when none were saved.
    pub async fn preferences(&self) -> Result<Preferences> {
        self.with_database(|db| db.preferences()).await
    }

    /// Applies the changes and returns the preferences as saved.
    pub async fn update_preferences(&self, params: &UpdatePreferences) -> Result<Preferences> {
        let params = params.clone();

        self.with_database(move |db| {
            let mut preferences = db.preferences()?;
            if let Some(color) = params.color {
                preferences.color = color;
            }
            params.apply_dietary(&mut preferences.dietary);
            db.save_preferences(&preferences)?;
            Ok(preferences)
        })
        .await
    }
}
