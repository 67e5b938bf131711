use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::fetcher::ReelFetcher;
use super::output::OutputArea;
use super::render::{render, LOADING};
use super::result::ReelResult;

/// What a single invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The result was rendered into the output area.
    Rendered(ReelResult),
    /// A newer invocation started while this one was in flight; its
    /// response was dropped without touching the output area.
    Stale,
}

/// Binds a fetcher to an output area.
///
/// Overlapping invocations are not serialized. Each one takes a
/// generation number when it starts and only renders if no newer
/// invocation has started by the time its response arrives, so the
/// latest request always owns the final output.
pub struct MoodReelHandler {
    fetcher: ReelFetcher,
    output: Arc<dyn OutputArea>,
    generation: AtomicU64,
}

impl MoodReelHandler {
    pub fn new(fetcher: ReelFetcher, output: Arc<dyn OutputArea>) -> Self {
        Self {
            fetcher,
            output,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn invoke(&self, mood: &str) -> Invocation {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.output.replace(LOADING);

        let result = self.fetcher.fetch(mood).await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            debug!(
                mood = %mood,
                generation = generation,
                latest = latest,
                "Discarding stale reel response"
            );
            return Invocation::Stale;
        }

        self.output.replace(&render(mood, &result));
        Invocation::Rendered(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reels::output::MemoryOutput;
    use crate::reels::render::{FAILURE, NO_REELS};
    use crate::testing::{spawn, unreachable_base};
    use axum::{extract::Query, routing::get, Json, Router};
    use std::collections::HashMap;
    use std::time::Duration;

    fn handler(base: String) -> (MoodReelHandler, Arc<MemoryOutput>) {
        let output = Arc::new(MemoryOutput::new());
        let handler = MoodReelHandler::new(ReelFetcher::new(base), output.clone());
        (handler, output)
    }

    fn reels_app() -> Router {
        Router::new().route(
            "/api/reels",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let mood = q.get("mood").cloned().unwrap_or_default();
                match mood.as_str() {
                    "cozy" => Json(serde_json::json!(["https://a.test/1", "https://a.test/2"])),
                    "slow" => {
                        tokio::time::sleep(Duration::from_millis(300)).await;
                        Json(serde_json::json!(["https://slow.test/1"]))
                    }
                    "fast" => Json(serde_json::json!(["https://fast.test/1"])),
                    _ => Json(serde_json::json!({ "error": "no reels" })),
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_cozy_scenario() {
        let (handler, output) = handler(spawn(reels_app()).await);

        let outcome = handler.invoke("cozy").await;
        assert!(matches!(outcome, Invocation::Rendered(ReelResult::Reels(ref urls)) if urls.len() == 2));

        let history = output.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], LOADING);

        let html = output.current();
        assert!(html.contains("Cozy"));
        let first = html.find("href=\"https://a.test/1\"").unwrap();
        let second = html.find("href=\"https://a.test/2\"").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_unknown_mood() {
        let (handler, output) = handler(spawn(reels_app()).await);
        handler.invoke("grumpy").await;
        assert_eq!(output.history(), vec![LOADING.to_string(), NO_REELS.to_string()]);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let (handler, output) = handler(unreachable_base().await);
        let outcome = handler.invoke("cozy").await;
        assert!(matches!(outcome, Invocation::Rendered(ReelResult::Failure(_))));
        assert_eq!(output.history(), vec![LOADING.to_string(), FAILURE.to_string()]);
    }

    #[tokio::test]
    async fn test_repeated_invocations_render_the_same() {
        let (handler, output) = handler(spawn(reels_app()).await);
        handler.invoke("cozy").await;
        let first = output.current();
        handler.invoke("cozy").await;
        assert_eq!(output.current(), first);
        assert_eq!(output.history().len(), 4);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (handler, output) = handler(spawn(reels_app()).await);
        let handler = Arc::new(handler);

        let slow = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.invoke("slow").await })
        };
        // Let the slow request get on the wire first.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let fast = handler.invoke("fast").await;
        let slow = slow.await.unwrap();

        assert!(matches!(fast, Invocation::Rendered(_)));
        assert_eq!(slow, Invocation::Stale);

        let html = output.current();
        assert!(html.contains("https://fast.test/1"));
        assert!(!html.contains("https://slow.test/1"));
    }
}
