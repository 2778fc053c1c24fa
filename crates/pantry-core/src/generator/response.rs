//! Turning a model reply into a recipe.

use serde::Deserialize;

use crate::{
    error::{PantryError, Result},
    models::NewRecipe,
};

const DEFAULT_NAME: &str = "Untitled Recipe";
const DEFAULT_PREP_TIME: &str = "15 minutes";
const DEFAULT_COOK_TIME: &str = "30 minutes";
const DEFAULT_INGREDIENT: &str = "Ingredients not specified";
const DEFAULT_INSTRUCTION: &str = "Instructions not available";

/// Fields the model is asked to return. Anything else, such as
/// `image_prompt`, is ignored.
#[derive(Debug, Deserialize)]
struct RecipeReply {
    recipe_name: Option<String>,
    prep_time: Option<String>,
    cook_time: Option<String>,
    ingredients: Option<Vec<String>>,
    instructions: Option<Vec<String>>,
}

/// Extracts a recipe from raw model output.
///
/// The JSON object is taken from the first `{` to the last `}`, so prose or
/// code fences around it are tolerated. Missing fields get defaults.
///
/// # Errors
///
/// Returns `PantryError::Generation` when the text holds no object, or the
/// object is not valid recipe JSON.
pub fn parse_recipe_response(text: &str) -> Result<NewRecipe> {
    let json = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => return Err(PantryError::generation("Could not parse AI response as JSON")),
    };

    let reply: RecipeReply = serde_json::from_str(json)
        .map_err(|_| PantryError::generation("Invalid JSON in AI response"))?;

    Ok(NewRecipe {
        name: reply.recipe_name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        prep_time: reply
            .prep_time
            .unwrap_or_else(|| DEFAULT_PREP_TIME.to_string()),
        cook_time: reply
            .cook_time
            .unwrap_or_else(|| DEFAULT_COOK_TIME.to_string()),
        ingredients: reply
            .ingredients
            .unwrap_or_else(|| vec![DEFAULT_INGREDIENT.to_string()]),
        instructions: reply
            .instructions
            .unwrap_or_else(|| vec![DEFAULT_INSTRUCTION.to_string()]),
    })
}
