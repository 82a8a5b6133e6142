pub mod builder;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod images;
pub mod model;
pub mod parser;
pub mod pipelines;
pub mod providers;
pub mod recaptcha;
pub mod render;

// Re-export commonly used types
pub use builder::{GeneratedRecipe, InputSource, ProviderKind, RecipeLens, RecipeLensBuilder};
pub use config::AppConfig;
pub use enrichment::{Enricher, Enrichment, ShoppingLink};
pub use error::RecipeLensError;
pub use images::{ImageSource, InlineImage};
pub use model::{Recipe, Section};
pub use parser::parse;

/// Generate a recipe for the dish in an image file.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = recipe_lens::generate_from_dish_photo("curry.jpg").await?;
/// println!("{}", recipe.name);
/// # Ok(())
/// # }
/// ```
pub async fn generate_from_dish_photo(path: &str) -> Result<Recipe, RecipeLensError> {
    let generated = RecipeLens::builder()
        .dish_image(ImageSource::Path(path.to_string()))
        .build()
        .await?;
    Ok(generated.recipe)
}

/// Generate a recipe from a comma-separated ingredient list.
pub async fn generate_from_ingredient_list(list: &str) -> Result<Recipe, RecipeLensError> {
    let generated = RecipeLens::builder()
        .ingredients(providers::prompt::split_ingredient_list(list))
        .build()
        .await?;
    Ok(generated.recipe)
}
