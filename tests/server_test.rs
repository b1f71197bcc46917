// Integration tests for the HTTP surface

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use resumebot::audit::AuditLogger;
use resumebot::chat::{ChatEngine, CLIENT_NOT_INITIALIZED_REPLY};
use resumebot::config::Identity;
use resumebot::context::{ContextBundle, ContextWarning};
use resumebot::server::{create_router, AppState, SessionManager};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// State with no API key: every turn short-circuits with the fixed reply.
fn test_state(dir: &TempDir) -> Arc<AppState> {
    let context = ContextBundle {
        summary: "Summary text.".to_string(),
        profile_text: "x".repeat(600),
    };
    let warnings = vec![ContextWarning::Missing {
        label: "Resume PDF",
        path: "me/linkedin.pdf".to_string(),
    }];

    Arc::new(AppState {
        engine: ChatEngine::new(
            None,
            "llama-3.1-8b-instant".to_string(),
            "You are acting as Salman Mohd.".to_string(),
        ),
        context,
        warnings,
        audit: AuditLogger::new(dir.path().join("chat_logs.txt")),
        sessions: SessionManager::new(),
        identity: Identity::default(),
    })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let app = create_router(test_state(&dir));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_index_page_carries_the_identity() {
    let dir = TempDir::new().unwrap();
    let app = create_router(test_state(&dir));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Salman Mohd"));
    assert!(page.contains("SAP HANA Administrator"));
    assert!(!page.contains("{{name}}"));
}

#[tokio::test]
async fn test_context_endpoint_truncates_profile_and_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let app = create_router(test_state(&dir));

    let response = app
        .oneshot(Request::get("/api/context").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    assert_eq!(json["summary"], "Summary text.");
    // 600-char profile: preview is exactly 500 chars plus the ellipsis
    let preview = json["profile_preview"].as_str().unwrap();
    assert_eq!(preview.chars().count(), 503);
    assert!(preview.ends_with("..."));

    assert_eq!(json["warnings"][0]["level"], "warning");
    assert!(json["warnings"][0]["message"]
        .as_str()
        .unwrap()
        .contains("me/linkedin.pdf"));
}

#[tokio::test]
async fn test_chat_issues_a_session_and_appends_turns() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    // First submission: a session id is issued
    let response = create_router(Arc::clone(&state))
        .oneshot(
            Request::post("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"message": "Hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = json_body(response).await;

    let session_id = first["session_id"].as_str().unwrap().to_string();
    assert_eq!(first["reply"], CLIENT_NOT_INITIALIZED_REPLY);
    assert_eq!(first["error_kind"], "client_not_initialized");
    assert_eq!(first["transcript"].as_array().unwrap().len(), 2);
    assert_eq!(first["transcript"][0]["role"], "user");
    assert_eq!(first["transcript"][0]["content"], "Hi");
    assert_eq!(first["transcript"][1]["role"], "assistant");

    // Second submission on the same session: transcript grows to 4
    let body = format!(r#"{{"session_id": "{session_id}", "message": "Still there?"}}"#);
    let response = create_router(Arc::clone(&state))
        .oneshot(
            Request::post("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let second = json_body(response).await;

    assert_eq!(second["session_id"], session_id.as_str());
    assert_eq!(second["transcript"].as_array().unwrap().len(), 4);
    assert_eq!(state.sessions.active_count(), 1);

    // Both prompts hit the audit log, in order
    let log = std::fs::read_to_string(dir.path().join("chat_logs.txt")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("USER PROMPT: Hi"));
    assert!(lines[1].ends_with("USER PROMPT: Still there?"));
}

#[tokio::test]
async fn test_chat_without_session_id_creates_isolated_sessions() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    for _ in 0..2 {
        let response = create_router(Arc::clone(&state))
            .oneshot(
                Request::post("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message": "Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = json_body(response).await;
        // Each fresh submission starts its own two-turn transcript
        assert_eq!(json["transcript"].as_array().unwrap().len(), 2);
    }

    assert_eq!(state.sessions.active_count(), 2);
}
