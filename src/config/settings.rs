// Configuration structs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constants;

/// The person the chatbot impersonates.
///
/// `primary_roles` is ordered: the first role drives the database-administration
/// directive in the system prompt, the second the AI-agents directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Display name used in the prompt and on the page
    pub display_name: String,

    /// The two roles the persona speaks to, in priority order
    pub primary_roles: [String; 2],
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            display_name: "Salman Mohd".to_string(),
            primary_roles: [
                "SAP HANA Administrator".to_string(),
                "Agentic AI Beginner".to_string(),
            ],
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: constants::DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Who the bot impersonates
    pub identity: Identity,

    /// Completion model identifier sent with every API request
    pub model: String,

    /// Resume PDF path
    pub profile_pdf_path: PathBuf,

    /// Plain-text summary path
    pub summary_path: PathBuf,

    /// Audit log path (append-only, one line per user prompt)
    pub audit_log_path: PathBuf,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Groq API key from the environment; `None` leaves the client
    /// uninitialized and every turn short-circuits with a fixed reply
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            model: constants::DEFAULT_MODEL.to_string(),
            profile_pdf_path: PathBuf::from(constants::DEFAULT_PROFILE_PDF_PATH),
            summary_path: PathBuf::from(constants::DEFAULT_SUMMARY_PATH),
            audit_log_path: PathBuf::from(constants::DEFAULT_AUDIT_LOG_PATH),
            server: ServerConfig::default(),
            api_key: None,
        }
    }
}
