#![allow(dead_code)]

use pantry_core::{Database, NewRecipe};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// A recipe with the given name and one ingredient per entry.
pub fn sample_recipe(name: &str, ingredients: &[&str]) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        prep_time: "10 minutes".to_string(),
        cook_time: "20 minutes".to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Prepare".to_string(), "Cook".to_string(), "Serve".to_string()],
    }
}

/// Gemini-shaped success body whose text is `text`.
pub fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}
