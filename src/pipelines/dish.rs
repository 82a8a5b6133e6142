use super::generate_and_parse;
use crate::error::Result;
use crate::images::InlineImage;
use crate::model::Recipe;
use crate::providers::prompt::build_dish_prompt;
use crate::providers::LlmProvider;

/// Generate a recipe for the dish shown in `image`.
///
/// `characteristics` are optional flavor hints ("spicy", "gluten free").
pub async fn process(
    provider: &dyn LlmProvider,
    image: &InlineImage,
    characteristics: Option<&str>,
) -> Result<Recipe> {
    let prompt = build_dish_prompt(characteristics);
    generate_and_parse(provider, &prompt, Some(image)).await
}
