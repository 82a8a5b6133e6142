//! Generation pipelines: prompt, provider call, parse.

pub mod dish;
pub mod ingredients;

use crate::error::Result;
use crate::images::InlineImage;
use crate::model::Recipe;
use crate::parser;
use crate::providers::LlmProvider;
use log::{debug, info};

/// Run one prompt through `provider` and parse whatever comes back.
async fn generate_and_parse(
    provider: &dyn LlmProvider,
    prompt: &str,
    image: Option<&InlineImage>,
) -> Result<Recipe> {
    let text = provider.generate(prompt, image).await?;
    debug!("Raw model answer:\n{}", text);

    let recipe = parser::parse(&text);
    info!(
        "Parsed recipe '{}' with {} ingredients and {} steps via {}",
        recipe.name,
        recipe.ingredients.len(),
        recipe.instructions.len(),
        provider.provider_name()
    );

    Ok(recipe)
}
