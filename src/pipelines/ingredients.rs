use super::generate_and_parse;
use crate::error::{RecipeLensError, Result};
use crate::images::InlineImage;
use crate::model::Recipe;
use crate::providers::prompt::build_ingredients_prompt;
use crate::providers::LlmProvider;

/// Generate a recipe from available ingredients.
///
/// Either a photo of the ingredients, a typed list, or both must be given.
pub async fn process(
    provider: &dyn LlmProvider,
    image: Option<&InlineImage>,
    ingredients: &[String],
) -> Result<Recipe> {
    let has_listed = ingredients.iter().any(|i| !i.trim().is_empty());
    if image.is_none() && !has_listed {
        return Err(RecipeLensError::InvalidInput(
            "provide an ingredients photo or at least one ingredient".to_string(),
        ));
    }

    let prompt = build_ingredients_prompt(image.is_some(), ingredients);
    generate_and_parse(provider, &prompt, image).await
}
