//! Prompt text sent to the model.

use super::RecipeRequest;

const RESPONSE_FORMAT: &str = r#" Return the response as a JSON object with the following structure:
{
    "recipe_name": "Name of the recipe",
    "prep_time": "Preparation time",
    "cook_time": "Cooking time",
    "ingredients": ["Ingredient 1", "Ingredient 2", ...],
    "instructions": ["Step 1", "Step 2", ...],
    "image_prompt": "A detailed prompt to generate an image for this dish"
}
Only respond with the JSON object, no introduction or additional text."#;

/// Builds the generation prompt for a request.
///
/// Active dietary filters are listed by label in canonical order.
pub fn build_prompt(request: &RecipeRequest) -> String {
    let mut prompt = format!(
        "Create a detailed recipe using these ingredients: {}.",
        request.ingredients
    );

    let labels = request.filters.labels();
    if !labels.is_empty() {
        prompt.push_str(&format!(" The recipe should be {}.", labels.join(", ")));
    }

    prompt.push_str(RESPONSE_FORMAT);
    prompt
}
