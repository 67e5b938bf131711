use tracing::{debug, warn};

use super::result::ReelResult;

/// Issues the outbound `GET <base>/api/reels?mood=...` call.
///
/// No timeout and no retries: a call waits as long as the underlying
/// client does and every failure is final.
#[derive(Debug, Clone)]
pub struct ReelFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ReelFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn reels_url(&self, mood: &str) -> String {
        format!("{}/api/reels?mood={}", self.base_url, urlencoding::encode(mood))
    }

    /// Look up reels for `mood`. The HTTP status is not inspected, only
    /// the shape of the body decides the outcome.
    pub async fn fetch(&self, mood: &str) -> ReelResult {
        match self.fetch_body(mood).await {
            Ok(body) => {
                let result = ReelResult::from_body(&body);
                if let ReelResult::Failure(ref reason) = result {
                    warn!(mood = %mood, "Reel lookup failed: {}", reason);
                }
                result
            }
            Err(e) => {
                warn!(mood = %mood, "Reel lookup failed: {}", e);
                ReelResult::Failure(e.to_string())
            }
        }
    }

    async fn fetch_body(&self, mood: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.reels_url(mood);
        debug!(url = %url, "Fetching reels");

        let response = self.client.get(&url).send().await.map_err(FetchError::Request)?;
        debug!(status = response.status().as_u16(), "Reel endpoint answered");

        let body = response.bytes().await.map_err(FetchError::Body)?;
        Ok(body.to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}
