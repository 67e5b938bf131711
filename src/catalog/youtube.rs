use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use super::mood::search_query;
use super::source::{CatalogError, Reel, ReelSource};
use crate::config::YoutubeConfig;

const SEARCH_ORDERS: &[&str] = &["date", "relevance", "viewCount"];
const MAX_DAYS_BACK: i64 = 14;
const SEARCH_PAGE_SIZE: u32 = 10;

/// Live lookup of recent YouTube Shorts through the Data API search
/// endpoint. Order and publish window are randomized per call to vary
/// what comes back.
pub struct YoutubeSource {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
    #[serde(default)]
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct SearchId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

impl YoutubeSource {
    /// `None` when no API key is configured.
    pub fn from_config(config: &YoutubeConfig) -> Option<Self> {
        let api_key = config.api_key.clone().filter(|k| !k.is_empty())?;
        Some(Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            max_results: config.max_results,
        })
    }

    fn search_params(&self, mood: &str) -> Vec<(&'static str, String)> {
        let mut rng = rand::rng();
        let days_back = rng.random_range(0..=MAX_DAYS_BACK);
        let published_after = (Utc::now() - Duration::days(days_back))
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let order = SEARCH_ORDERS.choose(&mut rng).copied().unwrap_or("relevance");

        vec![
            ("part", "snippet".to_string()),
            ("q", search_query(mood)),
            ("type", "video".to_string()),
            ("maxResults", SEARCH_PAGE_SIZE.to_string()),
            ("order", order.to_string()),
            ("publishedAfter", published_after),
            ("videoDuration", "short".to_string()),
            ("safeSearch", "strict".to_string()),
            ("key", self.api_key.clone()),
        ]
    }
}

fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

#[async_trait]
impl ReelSource for YoutubeSource {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn reels(&self, mood: &str) -> Result<Vec<Reel>, CatalogError> {
        let url = format!("{}/search", self.api_base);
        let params = self.search_params(mood);
        debug!(mood = %mood, "Searching YouTube");

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let results: SearchResponse = response.json().await?;
        let mut reels: Vec<Reel> = results
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                let title = item.snippet.map(|s| s.title).unwrap_or_default();
                Some(Reel::new(title, embed_url(&video_id)))
            })
            .collect();

        reels.shuffle(&mut rand::rng());
        reels.truncate(self.max_results);
        debug!(mood = %mood, count = reels.len(), "YouTube search done");
        Ok(reels)
    }
}
