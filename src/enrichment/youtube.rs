use crate::config::YoutubeConfig;
use crate::error::{RecipeLensError, Result};
use crate::providers::check_status;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Deserialize, Default)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Looks up a tutorial video for a recipe via the YouTube Data API.
pub struct YoutubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(config: &YoutubeConfig, client: Client) -> Self {
        Self {
            client,
            api_key: config
                .api_key
                .clone()
                .or_else(|| std::env::var("YOUTUBE_API_KEY").ok()),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Embed URL of the best video for `query`, or `None` when nothing
    /// usable comes back. Failures are logged, never returned.
    pub async fn search_video(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match self.try_search(query).await {
            Ok(Some(url)) => {
                info!("Found YouTube video for '{}': {}", query, url);
                Some(url)
            }
            Ok(None) => {
                info!("No YouTube videos found for '{}'", query);
                None
            }
            Err(e) => {
                warn!("Error searching YouTube video: {}", e);
                None
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            RecipeLensError::InvalidInput(
                "YOUTUBE_API_KEY not found in config or environment".to_string(),
            )
        })?;

        debug!("Searching YouTube for: {}", query);
        let search_query = format!("{} recipe", query);
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "id"),
                ("q", search_query.as_str()),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", api_key),
            ])
            .send()
            .await?;

        let body: SearchListResponse = check_status(response).await?.json().await?;
        debug!("YouTube API response: {:?}", body);

        Ok(first_embed_url(&body))
    }
}

fn first_embed_url(body: &SearchListResponse) -> Option<String> {
    body.items
        .iter()
        .filter_map(|item| item.id.as_ref()?.video_id.as_deref())
        .find(|id| !id.is_empty())
        .map(|id| format!("{}{}", EMBED_PREFIX, id))
}
