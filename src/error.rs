use thiserror::Error;

/// Errors that can occur while generating or enriching a recipe
#[derive(Error, Debug)]
pub enum RecipeLensError {
    /// Transport-level failure talking to a remote API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Provider returned a body we could not use
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider answered successfully but produced no text
    #[error("Generated text is empty")]
    EmptyResponse,

    /// Image could not be loaded or decoded
    #[error("Image error: {0}")]
    Image(String),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// The reCAPTCHA token was rejected
    #[error("reCAPTCHA verification failed")]
    RecaptchaFailed,

    /// The model answer did not contain a recognizable recipe
    #[error("Could not generate a recipe from the provided input")]
    NoRecipeGenerated,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecipeLensError>;
