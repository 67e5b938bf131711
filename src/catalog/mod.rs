pub mod fallback;
pub mod mood;
pub mod source;
pub mod youtube;

use std::sync::Arc;
use tracing::{info, warn};

pub use fallback::FallbackCatalog;
pub use mood::{detect_mood, is_greeting, resolve_mood, search_query};
pub use source::{CatalogError, Reel, ReelSource};
pub use youtube::YoutubeSource;

use crate::config::Config;

/// Result of a catalog lookup.
#[derive(Debug, Clone)]
pub struct Lookup {
    /// The mood the request resolved to.
    pub mood: String,
    pub reels: Vec<Reel>,
    /// Name of the source that answered, `None` if nothing did.
    pub source: Option<&'static str>,
}

/// Ordered list of reel sources. The first one that returns a non-empty
/// list answers, errors are logged and skipped.
pub struct ReelCatalog {
    sources: Vec<Arc<dyn ReelSource>>,
}

impl ReelCatalog {
    pub fn new(sources: Vec<Arc<dyn ReelSource>>) -> Self {
        Self { sources }
    }

    /// Live YouTube search when an API key is configured, then the
    /// fallback file.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let mut sources: Vec<Arc<dyn ReelSource>> = Vec::new();

        match YoutubeSource::from_config(&config.youtube) {
            Some(youtube) => sources.push(Arc::new(youtube)),
            None => info!("No YouTube API key configured, live search disabled"),
        }

        if let Some(ref path) = config.catalog.fallback {
            sources.push(Arc::new(FallbackCatalog::from_file(path)?));
        }

        Ok(Self::new(sources))
    }

    pub async fn lookup(&self, requested: &str) -> Lookup {
        let mood = resolve_mood(requested);

        for source in &self.sources {
            match source.reels(&mood).await {
                Ok(reels) if !reels.is_empty() => {
                    info!(mood = %mood, source = source.name(), count = reels.len(), "Found reels");
                    return Lookup {
                        mood,
                        reels,
                        source: Some(source.name()),
                    };
                }
                Ok(_) => {}
                Err(e) => warn!(mood = %mood, source = source.name(), "Reel source failed: {}", e),
            }
        }

        info!(mood = %mood, "No reels found");
        Lookup {
            mood,
            reels: Vec::new(),
            source: None,
        }
    }
}
