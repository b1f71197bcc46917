// Resumebot - persona chat grounded by a resume PDF and a summary file
// Main entry point

use std::sync::Arc;

use anyhow::Result;

use resumebot::audit::AuditLogger;
use resumebot::chat::ChatEngine;
use resumebot::config::load_config;
use resumebot::context::load_context;
use resumebot::groq::GroqClient;
use resumebot::prompt::system_prompt;
use resumebot::server::{self, AppState, SessionManager};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GROQ_API_KEY from a .env file if one is present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumebot=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = load_config()?;

    // Load grounding context; missing files degrade to empty strings
    let (context, warnings) = load_context(&config.profile_pdf_path, &config.summary_path);

    // System instruction: computed once, reused for every turn
    let instruction = system_prompt(&config.identity, &context);

    // Groq client; without a key the chat becomes a static error responder
    let client = match &config.api_key {
        Some(key) => match GroqClient::new(key.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to initialize Groq client: {e:#}");
                None
            }
        },
        None => {
            tracing::warn!(
                "GROQ_API_KEY is not set; every chat turn will return a fixed error reply"
            );
            None
        }
    };

    let engine = ChatEngine::new(client, config.model.clone(), instruction);
    let audit = AuditLogger::new(config.audit_log_path.clone());

    let state = Arc::new(AppState {
        engine,
        context,
        warnings,
        audit,
        sessions: SessionManager::new(),
        identity: config.identity.clone(),
    });

    server::serve(state, &config.server.bind_address).await
}
