mod anthropic;
mod factory;
mod fallback;
mod google;
mod open_ai;
pub mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::RECIPE_FORMAT_PROMPT;

use crate::error::{RecipeLensError, Result};
use crate::images::InlineImage;
use async_trait::async_trait;

/// Unified trait for all generative AI providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send a prompt, optionally with an image, and return the raw model text
    async fn generate(&self, prompt: &str, image: Option<&InlineImage>) -> Result<String>;
}

/// Turn a non-success response into an [`RecipeLensError::Api`].
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RecipeLensError::Api {
        status: status.as_u16(),
        body,
    })
}

/// Reject answers that contain no text at all.
pub(crate) fn non_empty(text: Option<&str>, provider: &str) -> Result<String> {
    let text = text.ok_or_else(|| {
        RecipeLensError::Provider(format!("Failed to extract content from {} response", provider))
    })?;

    if text.trim().is_empty() {
        return Err(RecipeLensError::EmptyResponse);
    }

    Ok(text.to_string())
}
