// Project-wide constants
//
// Centralised here so paths and other magic values have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Default bind address for the chat server (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Completion model requested from the Groq API.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Resume PDF, relative to the working directory.
pub const DEFAULT_PROFILE_PDF_PATH: &str = "me/linkedin.pdf";

/// Plain-text summary, relative to the working directory.
pub const DEFAULT_SUMMARY_PATH: &str = "me/summary.txt";

/// Append-only audit log of user prompts.
pub const DEFAULT_AUDIT_LOG_PATH: &str = "chat_logs.txt";

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Optional config file, relative to the working directory.
pub const CONFIG_FILE: &str = "resumebot.toml";
