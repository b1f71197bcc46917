// HTTP server for the chat page
//
// One axum app serving the page, the context panel API, and the chat
// endpoint. Sessions are tracked in-process; nothing survives a restart
// except the audit log.

mod handlers;
mod session;

pub use handlers::{
    create_router, profile_preview, AppState, ChatRequest, ChatResponse, PROFILE_PREVIEW_CHARS,
};
pub use session::{ChatSession, SessionManager};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;

/// Cap on request bodies. Chat messages are small; anything near this is
/// not a conversation.
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Bind and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {bind_address}"))?;

    let app = create_router(state)
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting resumebot server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
