pub mod api;
pub mod catalog;
pub mod config;
pub mod middleware;
pub mod reels;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use reels::{Invocation, MemoryOutput, MoodReelHandler, ReelFetcher};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Run the HTTP service. Without a config path the built-in defaults
/// are used.
pub async fn run(config_path: Option<&str>, debug_logs: bool) -> Result<(), ServerError> {
    let config = match config_path {
        Some(path) => {
            info!("Using config file: {}", path);
            config::Config::from_file(path)?
        }
        None => {
            info!("No config file given, using defaults");
            config::Config::default()
        }
    };
    if debug_logs {
        info!("Debug logging enabled");
    }
    info!("Reel fragments fetch from {}", config.endpoint);

    let catalog = Arc::new(catalog::ReelCatalog::from_config(&config)?);

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls_paths = config.tls_files();

    let state = server::AppState::new(config, catalog);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = tls_paths {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}

/// Run the fetcher once for `mood` and return the rendered markup
/// together with what the invocation did.
pub async fn fetch_once(endpoint: &str, mood: &str) -> (String, Invocation) {
    let output = Arc::new(MemoryOutput::new());
    let handler = MoodReelHandler::new(ReelFetcher::new(endpoint), output.clone());
    let invocation = handler.invoke(mood).await;
    (output.current(), invocation)
}
