use crate::config::RecaptchaConfig;
use log::{error, warn};
use reqwest::Client;
use serde::Deserialize;

const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Shape of the siteverify answer. Everything is optional so a malformed
/// body is a rejection rather than a decode panic.
#[derive(Debug, Deserialize, Default)]
struct SiteVerifyResponse {
    #[serde(default)]
    success: bool,
    score: Option<f64>,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Server-side check of reCAPTCHA tokens issued to the browser.
///
/// Verification fails closed: any transport problem, unexpected body or
/// missing secret counts as a rejected token.
pub struct RecaptchaVerifier {
    client: Client,
    secret: Option<String>,
    verify_url: String,
    min_score: Option<f64>,
}

impl RecaptchaVerifier {
    pub fn new(config: &RecaptchaConfig, client: Client) -> Self {
        Self {
            client,
            secret: config
                .secret_key
                .clone()
                .or_else(|| std::env::var("RECAPTCHA_SECRET_KEY").ok()),
            verify_url: config
                .verify_url
                .clone()
                .unwrap_or_else(|| SITEVERIFY_URL.to_string()),
            min_score: config.min_score,
        }
    }

    /// Returns true only when Google confirms the token.
    pub async fn verify(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            warn!("Empty reCAPTCHA token");
            return false;
        }

        let Some(secret) = &self.secret else {
            error!("RECAPTCHA_SECRET_KEY not found in config or environment");
            return false;
        };

        let params = [("secret", secret.as_str()), ("response", token)];
        let response = match self.client.post(&self.verify_url).form(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("reCAPTCHA verification request failed: {}", e);
                return false;
            }
        };

        let body: SiteVerifyResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("reCAPTCHA verification returned an unreadable body: {}", e);
                return false;
            }
        };

        self.accept(&body)
    }

    fn accept(&self, body: &SiteVerifyResponse) -> bool {
        if !body.success {
            warn!("reCAPTCHA rejected token: {:?}", body.error_codes);
            return false;
        }

        match (self.min_score, body.score) {
            (Some(min), Some(score)) if score < min => {
                warn!("reCAPTCHA score {} below threshold {}", score, min);
                false
            }
            (Some(_), None) => {
                warn!("reCAPTCHA response carried no score");
                false
            }
            _ => true,
        }
    }
}
