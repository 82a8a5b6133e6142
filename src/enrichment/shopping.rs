use crate::config::ShoppingConfig;
use crate::model::Recipe;
use crate::parser::clean_line;
use reqwest::Url;
use serde::Serialize;

/// Affiliate search link for one piece of equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingLink {
    pub item: String,
    pub url: String,
}

/// Build a store search URL for `item`, tagged with the affiliate id.
///
/// Returns `None` when the configured base URL is not a valid URL.
pub fn search_url(item: &str, config: &ShoppingConfig) -> Option<String> {
    let base = Url::parse(&config.base_url).ok()?;
    let mut url = base.join("s").ok()?;
    url.query_pairs_mut()
        .append_pair("k", item)
        .append_pair("tag", &config.affiliate_tag);
    Some(url.into())
}

/// One link per equipment entry, in recipe order.
pub fn links_for(recipe: &Recipe, config: &ShoppingConfig) -> Vec<ShoppingLink> {
    recipe
        .equipment_needed
        .iter()
        .map(|item| clean_line(item))
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            let url = search_url(&item, config)?;
            Some(ShoppingLink { item, url })
        })
        .collect()
}
