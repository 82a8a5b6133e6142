//! Extras shown next to a generated recipe: a tutorial video and
//! shopping links for the equipment it needs.

pub mod shopping;
pub mod youtube;

pub use shopping::ShoppingLink;
pub use youtube::YoutubeClient;

use crate::config::{AppConfig, ShoppingConfig};
use crate::model::Recipe;
use log::warn;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
    pub video_url: Option<String>,
    pub equipment_links: Vec<ShoppingLink>,
}

pub struct Enricher {
    youtube: Arc<YoutubeClient>,
    shopping: ShoppingConfig,
}

impl Enricher {
    pub fn new(config: &AppConfig, client: Client) -> Self {
        Self {
            youtube: Arc::new(YoutubeClient::new(&config.youtube, client)),
            shopping: config.shopping.clone(),
        }
    }

    /// Look up everything that decorates `recipe`.
    ///
    /// The video search runs on its own task while links are built; a
    /// panicked or failed lookup just leaves `video_url` empty.
    pub async fn enrich(&self, recipe: &Recipe) -> Enrichment {
        let youtube = Arc::clone(&self.youtube);
        let query = recipe.name.clone();
        let video = tokio::spawn(async move { youtube.search_video(&query).await });

        let equipment_links = shopping::links_for(recipe, &self.shopping);

        let video_url = match video.await {
            Ok(url) => url,
            Err(e) => {
                warn!("Video lookup task failed: {}", e);
                None
            }
        };

        Enrichment {
            video_url,
            equipment_links,
        }
    }
}
