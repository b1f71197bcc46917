// Static grounding context: resume PDF text plus plain-text summary
//
// Loading never fails — a missing or unreadable source degrades to an empty
// string and a warning, so the chat stays usable with reduced grounding.

use std::path::Path;

use lopdf::Document;
use thiserror::Error;
use tracing::{error, warn};

/// The static grounding text, loaded once at startup and shared read-only
/// by every session.
#[derive(Debug, Clone, Default)]
pub struct ContextBundle {
    /// Contents of the summary text file
    pub summary: String,
    /// Text extracted from the resume PDF, pages concatenated in order
    pub profile_text: String,
}

/// Non-fatal problems encountered while loading context sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextWarning {
    #[error("{label} not found at: {path}. Chatbot context may be limited.")]
    Missing { label: &'static str, path: String },

    #[error("Error reading {label} at {path}: {cause}")]
    Unreadable {
        label: &'static str,
        path: String,
        cause: String,
    },
}

impl ContextWarning {
    /// Missing files are expected on a fresh checkout; read failures are not.
    pub fn is_error(&self) -> bool {
        matches!(self, ContextWarning::Unreadable { .. })
    }
}

/// Load both context sources. Warnings are returned for the UI layer and
/// also logged here; the bundle itself is always produced.
pub fn load_context(pdf_path: &Path, summary_path: &Path) -> (ContextBundle, Vec<ContextWarning>) {
    let mut warnings = Vec::new();

    let profile_text = load_pdf_text(pdf_path, &mut warnings);
    let summary = load_text_file(summary_path, &mut warnings);

    for warning in &warnings {
        if warning.is_error() {
            error!("{warning}");
        } else {
            warn!("{warning}");
        }
    }

    (
        ContextBundle {
            summary,
            profile_text,
        },
        warnings,
    )
}

fn load_pdf_text(path: &Path, warnings: &mut Vec<ContextWarning>) -> String {
    const LABEL: &str = "Resume PDF";

    if !path.exists() {
        warnings.push(ContextWarning::Missing {
            label: LABEL,
            path: path.display().to_string(),
        });
        return String::new();
    }

    match extract_pdf_text(path) {
        Ok(text) => text,
        Err(e) => {
            warnings.push(ContextWarning::Unreadable {
                label: LABEL,
                path: path.display().to_string(),
                cause: e.to_string(),
            });
            String::new()
        }
    }
}

/// Extract text page by page, concatenated in page order. Pages that yield
/// no text are skipped rather than failing the whole document.
fn extract_pdf_text(path: &Path) -> Result<String, lopdf::Error> {
    let doc = Document::load(path)?;
    let mut text = String::new();

    for page_number in doc.get_pages().keys() {
        if let Ok(page_text) = doc.extract_text(&[*page_number]) {
            text.push_str(&page_text);
        }
    }

    Ok(text)
}

fn load_text_file(path: &Path, warnings: &mut Vec<ContextWarning>) -> String {
    const LABEL: &str = "Summary file";

    if !path.exists() {
        warnings.push(ContextWarning::Missing {
            label: LABEL,
            path: path.display().to_string(),
        });
        return String::new();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warnings.push(ContextWarning::Unreadable {
                label: LABEL,
                path: path.display().to_string(),
                cause: e.to_string(),
            });
            String::new()
        }
    }
}
