// Configuration loader
// Reads the optional resumebot.toml from the working directory and the
// GROQ_API_KEY environment variable

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::constants;
use super::settings::{Config, Identity, ServerConfig};

/// Load configuration from `resumebot.toml` (if present) and the environment.
///
/// A missing config file yields the defaults; a present but malformed file is
/// a startup error. A missing `GROQ_API_KEY` is not an error here — the chat
/// degrades to a fixed "client not initialized" responder instead.
pub fn load_config() -> Result<Config> {
    load_config_from(Path::new(constants::CONFIG_FILE))
}

/// Same as [`load_config`] with an explicit file path, for tests.
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    // Parse TOML into a struct where every section is optional.
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        identity: Option<Identity>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        profile_pdf_path: Option<PathBuf>,
        #[serde(default)]
        summary_path: Option<PathBuf>,
        #[serde(default)]
        audit_log_path: Option<PathBuf>,
        #[serde(default)]
        server: Option<ServerConfig>,
    }

    let mut config = Config::default();

    if config_path.exists() {
        let contents = fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;
        let toml_config: TomlConfig = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })?;

        // Apply overrides
        if let Some(identity) = toml_config.identity {
            config.identity = identity;
        }
        if let Some(model) = toml_config.model {
            config.model = model;
        }
        if let Some(path) = toml_config.profile_pdf_path {
            config.profile_pdf_path = path;
        }
        if let Some(path) = toml_config.summary_path {
            config.summary_path = path;
        }
        if let Some(path) = toml_config.audit_log_path {
            config.audit_log_path = path;
        }
        if let Some(server) = toml_config.server {
            config.server = server;
        }
    }

    config.api_key = std::env::var(constants::GROQ_API_KEY_VAR)
        .ok()
        .filter(|key| !key.is_empty());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config_from(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.model, constants::DEFAULT_MODEL);
        assert_eq!(config.identity.display_name, "Salman Mohd");
    }

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
model = "llama-3.3-70b-versatile"
summary_path = "data/about.txt"

[identity]
display_name = "Jane Doe"
primary_roles = ["Platform Engineer", "LLM Tinkerer"]
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.summary_path, PathBuf::from("data/about.txt"));
        assert_eq!(config.identity.display_name, "Jane Doe");
        // Untouched fields keep their defaults
        assert_eq!(
            config.profile_pdf_path,
            PathBuf::from(constants::DEFAULT_PROFILE_PDF_PATH)
        );
        assert_eq!(
            config.server.bind_address,
            constants::DEFAULT_HTTP_ADDR
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "model = [this is not toml").unwrap();
        assert!(load_config_from(file.path()).is_err());
    }
}
