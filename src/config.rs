use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default provider to use when not specified
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Fallback configuration for automatic provider switching
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// Video tutorial lookup
    #[serde(default)]
    pub youtube: YoutubeConfig,
    /// Bot protection for generation requests
    #[serde(default)]
    pub recaptcha: RecaptchaConfig,
    /// Shopping link generation
    #[serde(default)]
    pub shopping: ShoppingConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            fallback: FallbackConfig::default(),
            youtube: YoutubeConfig::default(),
            recaptcha: RecaptchaConfig::default(),
            shopping: ShoppingConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for a specific AI provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gemini-1.5-flash", "gpt-4o")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Enabled configuration with default sampling settings for `model`
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            enabled: true,
            model: model.into(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for provider fallback and retry behavior
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Whether fallback is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Order of providers to try (first to last)
    #[serde(default)]
    pub order: Vec<String>,
    /// Number of retry attempts per provider before fallback
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay between retries in milliseconds, multiplied by the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            order: Vec::new(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// YouTube Data API settings
#[derive(Debug, Deserialize, Clone, Default)]
pub struct YoutubeConfig {
    /// API key (falls back to YOUTUBE_API_KEY)
    pub api_key: Option<String>,
    /// Override for the API root, used by tests and proxies
    pub base_url: Option<String>,
}

/// reCAPTCHA siteverify settings
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RecaptchaConfig {
    /// Server-side secret (falls back to RECAPTCHA_SECRET_KEY)
    pub secret_key: Option<String>,
    /// Override for the siteverify endpoint
    pub verify_url: Option<String>,
    /// Minimum v3 score to accept; unset accepts any successful token
    pub min_score: Option<f64>,
}

/// Affiliate shopping link settings
#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    #[serde(default = "default_affiliate_tag")]
    pub affiliate_tag: String,
    #[serde(default = "default_shopping_base_url")]
    pub base_url: String,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            affiliate_tag: default_affiliate_tag(),
            base_url: default_shopping_base_url(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    30
}

fn default_affiliate_tag() -> String {
    "recipelens-20".to_string()
}

fn default_shopping_base_url() -> String {
    "https://www.amazon.com".to_string()
}

/// Default model for each supported provider
pub fn default_model(provider: &str) -> &'static str {
    match provider {
        "openai" => "gpt-4o-mini",
        "anthropic" => "claude-3-5-sonnet-20241022",
        _ => "gemini-1.5-flash",
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_LENS__ prefix
    /// 2. recipe-lens.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_LENS__PROVIDERS__GOOGLE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration for the default provider, synthesizing one when the
    /// provider table is empty.
    pub fn default_provider_config(&self) -> ProviderConfig {
        self.providers
            .get(&self.default_provider)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_model(default_model(&self.default_provider)))
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-lens").required(false))
        // Use double underscore for nested: RECIPE_LENS__PROVIDERS__GOOGLE__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_LENS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
