use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use super::source::{CatalogError, Reel, ReelSource};

/// Static mood → reels table loaded from a JSON file.
///
/// The file is an object keyed by mood, matched case-insensitively.
/// Values that are not arrays are skipped, so unrelated keys can live in
/// the same file. Array entries are either `{"title": .., "video_url": ..}` objects or bare URLs.
#[derive(Debug, Default, Clone)]
pub struct FallbackCatalog {
    reels: HashMap<String, Vec<Reel>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Reel(Reel),
    Url(String),
}

impl From<Entry> for Reel {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Reel(reel) => reel,
            Entry::Url(url) => Reel::new(String::new(), url),
        }
    }
}

impl FallbackCatalog {
    /// Load the catalog. A missing file gives an empty catalog.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let display_path = path.to_string_lossy().to_string();

        if !path.exists() {
            warn!("Fallback catalog {} not found, starting empty", display_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::ReadError(display_path.clone(), e))?;
        let catalog = Self::from_json(&content).map_err(|e| CatalogError::ParseError(display_path.clone(), e))?;

        info!("Loaded fallback catalog {} ({} moods)", display_path, catalog.reels.len());
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Value> = serde_json::from_str(content)?;

        let mut reels = HashMap::new();
        for (mood, value) in raw {
            if !value.is_array() {
                continue;
            }
            match serde_json::from_value::<Vec<Entry>>(value) {
                Ok(entries) => {
                    reels
                        .entry(mood.to_lowercase())
                        .or_insert_with(Vec::new)
                        .extend(entries.into_iter().map(Reel::from));
                }
                Err(e) => warn!("Skipping fallback entry {}: {}", mood, e),
            }
        }

        Ok(Self { reels })
    }

    pub fn get(&self, mood: &str) -> Option<&[Reel]> {
        self.reels.get(&mood.to_lowercase()).map(Vec::as_slice)
    }

    pub fn moods(&self) -> Vec<&str> {
        let mut moods: Vec<&str> = self.reels.keys().map(String::as_str).collect();
        moods.sort();
        moods
    }
}

#[async_trait]
impl ReelSource for FallbackCatalog {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn reels(&self, mood: &str) -> Result<Vec<Reel>, CatalogError> {
        Ok(self.get(mood).map(<[Reel]>::to_vec).unwrap_or_default())
    }
}
