// HTTP handlers for the chat page and API

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::session::SessionManager;
use crate::audit::AuditLogger;
use crate::chat::{ChatEngine, Transcript, TurnErrorKind};
use crate::config::Identity;
use crate::context::{ContextBundle, ContextWarning};

/// Characters of the profile text shown in the context panel.
pub const PROFILE_PREVIEW_CHARS: usize = 500;

/// Everything the handlers need, shared across all sessions.
pub struct AppState {
    pub engine: ChatEngine,
    pub context: ContextBundle,
    pub warnings: Vec<ContextWarning>,
    pub audit: AuditLogger,
    pub sessions: SessionManager,
    pub identity: Identity,
}

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(health_check))
        .route("/api/context", get(handle_context))
        .route("/api/chat", post(handle_chat))
        .with_state(state)
}

/// The single chat page, with the identity baked in. Everything dynamic is
/// fetched from the API by the page itself.
async fn handle_index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = include_str!("page.html")
        .replace("{{name}}", &state.identity.display_name)
        .replace("{{role_1}}", &state.identity.primary_roles[0])
        .replace("{{role_2}}", &state.identity.primary_roles[1]);
    Html(page)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Serialize)]
struct WarningNotice {
    level: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ContextResponse {
    summary: String,
    profile_preview: String,
    warnings: Vec<WarningNotice>,
}

/// Context panel contents: the full summary, the truncated profile preview,
/// and any load warnings mapped to a notification level.
async fn handle_context(State(state): State<Arc<AppState>>) -> Json<ContextResponse> {
    let warnings = state
        .warnings
        .iter()
        .map(|w| WarningNotice {
            level: if w.is_error() { "error" } else { "warning" },
            message: w.to_string(),
        })
        .collect();

    Json(ContextResponse {
        summary: state.context.summary.clone(),
        profile_preview: profile_preview(&state.context.profile_text, PROFILE_PREVIEW_CHARS),
        warnings,
    })
}

/// First `limit` characters, with "..." appended only when text was cut.
pub fn profile_preview(text: &str, limit: usize) -> String {
    let mut preview: String = text.chars().take(limit).collect();
    if text.chars().count() > limit {
        preview.push_str("...");
    }
    preview
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<TurnErrorKind>,
    pub transcript: Transcript,
}

/// One user submission. The prompt is audit-logged before anything else;
/// the session's transcript lock serializes turns within a session.
async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    state.audit.log_user_prompt(&request.message);

    let session = state.sessions.get_or_create(request.session_id);
    let mut transcript = session.transcript.lock().await;

    let reply = state.engine.handle_turn(&mut transcript, &request.message).await;

    Json(ChatResponse {
        session_id: session.id,
        reply: reply.text,
        error_kind: reply.error,
        transcript: transcript.clone(),
    })
}
