use crate::config::{AppConfig, ProviderConfig};
use crate::error::{RecipeLensError, Result};
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};
use reqwest::Client;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        client: Client,
    ) -> Result<Box<dyn LlmProvider>> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(RecipeLensError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config, client)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, client)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, client)?)),
            _ => Err(RecipeLensError::Provider(format!(
                "Unknown provider: {}",
                provider_name
            ))),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AppConfig, client: Client) -> Result<Box<dyn LlmProvider>> {
        Self::create(
            &config.default_provider,
            &config.default_provider_config(),
            client,
        )
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai", "anthropic"]
    }
}
