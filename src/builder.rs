use std::time::Duration;

use log::{info, warn};
use reqwest::Client;

use crate::config::{default_model, AppConfig, ProviderConfig};
use crate::enrichment::{Enricher, Enrichment};
use crate::error::{RecipeLensError, Result};
use crate::images::{self, ImageSource};
use crate::model::Recipe;
use crate::pipelines;
use crate::providers::{FallbackProvider, LlmProvider, ProviderFactory};
use crate::recaptcha::RecaptchaVerifier;

/// What the user handed us
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Photo of a finished dish
    Dish(ImageSource),
    /// Photo of the available ingredients
    IngredientsPhoto(ImageSource),
    /// Typed ingredient list only
    IngredientList,
}

/// Optional provider override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "google" | "gemini" => Some(ProviderKind::Google),
            "openai" => Some(ProviderKind::OpenAI),
            "anthropic" | "claude" => Some(ProviderKind::Anthropic),
            _ => None,
        }
    }
}

/// A parsed recipe plus its optional extras
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    pub enrichment: Option<Enrichment>,
}

/// Builder for configuring and executing recipe generation
#[derive(Debug, Default)]
pub struct RecipeLensBuilder {
    source: Option<InputSource>,
    ingredients: Vec<String>,
    characteristics: Option<String>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    recaptcha_token: Option<String>,
    enrich: bool,
    config: Option<AppConfig>,
}

impl RecipeLensBuilder {
    /// Generate a recipe for the dish shown in a photo
    ///
    /// # Example
    /// ```
    /// use recipe_lens::{ImageSource, RecipeLens};
    ///
    /// let builder = RecipeLens::builder()
    ///     .dish_image(ImageSource::Path("lasagna.jpg".to_string()));
    /// ```
    pub fn dish_image(mut self, image: ImageSource) -> Self {
        self.source = Some(InputSource::Dish(image));
        self
    }

    /// Generate a recipe from a photo of available ingredients
    pub fn ingredients_image(mut self, image: ImageSource) -> Self {
        self.source = Some(InputSource::IngredientsPhoto(image));
        self
    }

    /// Add typed ingredients
    ///
    /// On their own they form the whole ingredient list; combined with an
    /// ingredients photo they are extras the model should consider.
    ///
    /// # Example
    /// ```
    /// use recipe_lens::RecipeLens;
    ///
    /// let builder = RecipeLens::builder()
    ///     .ingredients(["chickpeas", "tahini", "lemon"]);
    /// ```
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients.extend(ingredients.into_iter().map(Into::into));
        if self.source.is_none() {
            self.source = Some(InputSource::IngredientList);
        }
        self
    }

    /// Flavor hints for dish photos, e.g. "extra spicy"
    pub fn characteristics(mut self, characteristics: impl Into<String>) -> Self {
        self.characteristics = Some(characteristics.into());
        self
    }

    /// Set a custom LLM provider
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the LLM provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Require a valid reCAPTCHA token before calling the model
    pub fn recaptcha_token(mut self, token: impl Into<String>) -> Self {
        self.recaptcha_token = Some(token.into());
        self
    }

    /// Also look up a video tutorial and shopping links
    pub fn with_enrichment(mut self) -> Self {
        self.enrich = true;
        self
    }

    /// Use an explicit configuration instead of loading one
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the generation
    ///
    /// # Errors
    /// Returns `RecipeLensError` if:
    /// - No input source was specified
    /// - The reCAPTCHA token is rejected
    /// - The image cannot be loaded or the provider call fails
    /// - The model answer contains no recognizable recipe
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_lens::{ImageSource, RecipeLens};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let generated = RecipeLens::builder()
    ///     .dish_image(ImageSource::Path("lasagna.jpg".to_string()))
    ///     .with_enrichment()
    ///     .build()
    ///     .await?;
    /// println!("{}", generated.recipe.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<GeneratedRecipe> {
        let source = self.source.clone().ok_or_else(|| {
            RecipeLensError::Builder(
                "No input source specified. Use .dish_image(), .ingredients_image() or .ingredients()"
                    .to_string(),
            )
        })?;

        let config = match self.config.clone() {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));
        let client = Client::builder().timeout(timeout).build()?;

        if let Some(token) = &self.recaptcha_token {
            let verifier = RecaptchaVerifier::new(&config.recaptcha, client.clone());
            if !verifier.verify(token).await {
                return Err(RecipeLensError::RecaptchaFailed);
            }
        }

        let provider = self.create_provider(&config, client.clone())?;
        let recipe = self.run(source, provider.as_ref()).await?;

        if recipe.is_empty() {
            warn!("Model answer did not contain a recognizable recipe");
            return Err(RecipeLensError::NoRecipeGenerated);
        }

        let enrichment = if self.enrich {
            Some(Enricher::new(&config, client).enrich(&recipe).await)
        } else {
            None
        };

        Ok(GeneratedRecipe { recipe, enrichment })
    }

    async fn run(&self, source: InputSource, provider: &dyn LlmProvider) -> Result<Recipe> {
        match source {
            InputSource::Dish(image) => {
                info!("Generating recipe from dish image");
                let image = images::load(&image).await?;
                pipelines::dish::process(provider, &image, self.characteristics.as_deref()).await
            }
            InputSource::IngredientsPhoto(image) => {
                info!("Generating recipe from ingredients image");
                let image = images::load(&image).await?;
                pipelines::ingredients::process(provider, Some(&image), &self.ingredients).await
            }
            InputSource::IngredientList => {
                info!("Generating recipe from ingredients: {:?}", self.ingredients);
                pipelines::ingredients::process(provider, None, &self.ingredients).await
            }
        }
    }

    /// Explicit overrides pick a single provider; otherwise the configured
    /// fallback chain (or default provider) is used.
    fn create_provider(&self, config: &AppConfig, client: Client) -> Result<Box<dyn LlmProvider>> {
        if self.provider.is_none() && self.api_key.is_none() && self.model.is_none() {
            return Ok(Box::new(FallbackProvider::new(config, client)?));
        }

        let name = self
            .provider
            .map(|p| p.as_str())
            .unwrap_or(config.default_provider.as_str());

        let mut provider_config = config
            .providers
            .get(name)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_model(default_model(name)));
        provider_config.enabled = true;
        if let Some(key) = &self.api_key {
            provider_config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            provider_config.model = model.clone();
        }

        ProviderFactory::create(name, &provider_config, client)
    }
}

/// Main entry point for the builder API
pub struct RecipeLens;

impl RecipeLens {
    /// Creates a new builder for generating recipes
    pub fn builder() -> RecipeLensBuilder {
        RecipeLensBuilder::default()
    }
}
