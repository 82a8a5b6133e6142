use crate::config::ProviderConfig;
use crate::error::{RecipeLensError, Result};
use crate::images::InlineImage;
use crate::providers::{check_status, non_empty, LlmProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig, client: Client) -> Result<Self> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| {
                RecipeLensError::Provider(
                    "GOOGLE_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body(&self, prompt: &str, image: Option<&InlineImage>) -> Value {
        let mut parts = vec![json!({ "text": prompt })];
        if let Some(image) = image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data
                }
            }));
        }

        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_tokens
            }
        })
    }
}

#[async_trait]
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str, image: Option<&InlineImage>) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&self.request_body(prompt, image))
            .send()
            .await?;

        let response_body: Value = check_status(response).await?.json().await?;
        debug!("{:?}", response_body);

        // Gemini may split one answer across several parts
        let text = response_body["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            });

        non_empty(text.as_deref(), "Google Gemini")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_config(base_url: Option<String>) -> ProviderConfig {
        ProviderConfig {
            api_key: Some("test-key".to_string()),
            base_url,
            ..ProviderConfig::for_model("gemini-1.5-flash")
        }
    }

    #[test]
    fn test_provider_name() {
        let provider = GoogleProvider::new(&test_config(None), Client::new()).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_request_body_includes_inline_image() {
        let provider = GoogleProvider::new(&test_config(None), Client::new()).unwrap();
        let image = InlineImage {
            data: "aGVsbG8=".to_string(),
            mime_type: "image/png".to_string(),
        };

        let body = provider.request_body("describe", Some(&image));
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "describe");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);

        let text_only = provider.request_body("describe", None);
        assert_eq!(text_only["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [
                                {"text": "Pancakes\n\nIngredients:\n"},
                                {"text": "- flour"}
                            ]
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(Some(server.url())), Client::new()).unwrap();
        let text = provider.generate("make pancakes", None).await.unwrap();

        assert_eq!(text, "Pancakes\n\nIngredients:\n- flour");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(Some(server.url())), Client::new()).unwrap();
        let result = provider.generate("prompt", None).await;

        match result {
            Err(RecipeLensError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_blocked_candidate() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(Some(server.url())), Client::new()).unwrap();
        let result = provider.generate("prompt", None).await;
        assert!(matches!(result, Err(RecipeLensError::Provider(_))));
    }
}
