use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    /// Base URL the `/reels` fragment fetches from.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub youtube: YoutubeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_fallback")]
    pub fallback: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YoutubeConfig {
    #[serde(alias = "apikey")]
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(alias = "apibase")]
    #[serde(default = "default_youtube_api_base")]
    pub api_base: String,
    #[serde(alias = "maxresults")]
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_youtube_api_base(),
            max_results: default_max_results(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            appdir: None,
            endpoint: default_endpoint(),
            catalog: CatalogConfig::default(),
            youtube: YoutubeConfig::default(),
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_fallback() -> Option<String> {
    Some("reels_data.json".to_string())
}

fn default_youtube_api_base() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_max_results() -> usize {
    5
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Certificate and key paths, only when both are set.
    pub fn tls_files(&self) -> Option<(String, String)> {
        self.listen.tlscert.clone().zip(self.listen.tlskey.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
