mod routes;
pub mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feed::{HttpNewsSource, NewsSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn NewsSource>,
}

impl AppState {
    /// State backed by the HTTP news endpoint from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self> {
        let source =
            HttpNewsSource::from_config(&config).context("Failed to build news client")?;
        info!(endpoint = %source.endpoint(), "News source configured");
        Ok(Self {
            config: Arc::new(config),
            source: Arc::new(source),
        })
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::from_config(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
///
/// Unmatched paths fall through to the static directory, which carries
/// `/sw.js`, `/manifest.json` and the stylesheet.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir(state.config.static_dir.as_ref());
    info!(static_dir = ?static_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .fallback_service(ServeDir::new(&static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. `STATIC_DIR` when configured
/// 2. ./static (development)
/// 3. /usr/share/voicenews/static (installed)
/// 4. Falls back to ./static
fn find_static_dir(configured: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = configured {
        return path.clone();
    }

    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/voicenews/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
