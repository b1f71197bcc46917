// Audit log of user prompts
//
// One line per user turn, appended before the turn is processed:
//   [YYYY-MM-DD HH:MM:SS] USER PROMPT: <raw text>
// The raw text is not escaped, so embedded newlines corrupt line-based
// parsing of the log. No rotation and no size bound.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record a user prompt. A write failure is reported on the developer
    /// channel only and never blocks the chat turn.
    pub fn log_user_prompt(&self, prompt: &str) {
        if let Err(e) = self.append(prompt) {
            tracing::error!("Error logging prompt: {e:#}");
        }
    }

    fn append(&self, prompt: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create audit log directory")?;
            }
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .context("Failed to open audit log")?;

        writeln!(file, "[{timestamp}] USER PROMPT: {prompt}")
            .context("Failed to write audit log entry")?;

        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
