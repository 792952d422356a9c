//! Local HTTP surface for the execbrief UI layer
//!
//! Two POST endpoints proxy the UI's requests to the upstream services:
//! `/api/zeroentropy` runs a synthesis query (live or demo mode) and
//! `/api/claude` answers a query from supplied context via the Anthropic
//! messages API. Started from the CLI via [`start_server`].

use axum::routing::post;
use axum::Router;
use execbrief_core::{ClaudeClient, ZeroEntropyClient};
use std::net::SocketAddr;
use std::sync::Arc;

pub mod routes;

/// Shared application state: the two upstream clients.
#[derive(Clone)]
pub struct AppState {
    pub zeroentropy: Arc<ZeroEntropyClient>,
    pub claude: Arc<ClaudeClient>,
}

impl AppState {
    pub fn new(zeroentropy: Arc<ZeroEntropyClient>, claude: Arc<ClaudeClient>) -> Self {
        Self { zeroentropy, claude }
    }

    /// Build state from environment configuration. Missing API keys degrade
    /// the corresponding endpoint instead of failing startup.
    pub fn from_env() -> execbrief_core::Result<Self> {
        Ok(Self::new(
            Arc::new(ZeroEntropyClient::from_env()?),
            Arc::new(ClaudeClient::from_env()?),
        ))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/zeroentropy", post(routes::zeroentropy_synthesize))
        .route("/api/claude", post(routes::claude_answer))
        .with_state(state)
}

/// Bind and serve the local surface until the process exits.
pub async fn start_server(state: AppState, addr: SocketAddr) -> execbrief_core::Result<()> {
    let zeroentropy_mode = if state.zeroentropy.is_configured() {
        "live"
    } else {
        "demo"
    };
    tracing::info!("ZeroEntropy client mode: {}", zeroentropy_mode);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(execbrief_core::ExecBriefError::Io)?;
    Ok(())
}
