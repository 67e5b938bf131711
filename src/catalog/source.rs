use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single short video as known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    #[serde(default)]
    pub title: String,
    pub video_url: String,
}

impl Reel {
    pub fn new(title: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_url: video_url.into(),
        }
    }
}

/// Somewhere reels for a mood can come from.
#[async_trait]
pub trait ReelSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Reels for an already resolved mood. An empty list means the
    /// source knows nothing about it.
    async fn reels(&self, mood: &str) -> Result<Vec<Reel>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },
    #[error("Failed to read catalog file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse catalog file {0}: {1}")]
    ParseError(String, serde_json::Error),
}
