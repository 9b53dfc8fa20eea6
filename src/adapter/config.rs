//! Configuration
//!
//! 環境変数からの認証情報と、任意のJSON設定ファイル

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::time::Duration;

use crate::application::dto::session_config::{
    SessionConfig, DEFAULT_INSTRUCTIONS, DEFAULT_MODEL, DEFAULT_POLL_INTERVAL, DEFAULT_STORE_NAME,
};
use crate::domain::errors::DocAskError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider credentials and endpoint, read once at startup
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Load from the process environment
    ///
    /// Callers that want `.env` support should run `dotenvy::dotenv()` first.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, DocAskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_empty(API_KEY_VAR)
            .ok_or_else(|| DocAskError::MissingCredential(API_KEY_VAR.to_string()))?;
        let model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, model, base_url))
    }

    /// Replace the model when an override is given
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Optional JSON settings file
///
/// ```json
/// {
///   "store_name": "annual-reports",
///   "instructions": "Answer only from the files.",
///   "poll_interval_ms": 2000
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub store_name: Option<String>,
    pub instructions: Option<String>,
    pub poll_interval_ms: Option<u64>,
}

impl Settings {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read settings file: {}", expanded))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", expanded))?;
        Ok(settings)
    }

    /// Load the file if a path was given, otherwise use defaults
    pub fn load_optional(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the session configuration
    ///
    /// `store_name_override` (from the command line) wins over the file.
    pub fn session_config(&self, model: &str, store_name_override: Option<&str>) -> SessionConfig {
        let store_name = store_name_override
            .map(str::to_string)
            .or_else(|| self.store_name.clone())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());
        let instructions = self
            .instructions
            .clone()
            .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string());
        let poll_interval = self
            .poll_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        SessionConfig::new(model.to_string(), store_name, instructions, poll_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, DocAskError::MissingCredential("OPENAI_API_KEY".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let err = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, DocAskError::MissingCredential(_)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_model_and_base_url_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4.1-mini"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_with_model_override() {
        let config = Config::new("sk", "gpt-4o", DEFAULT_BASE_URL);

        assert_eq!(config.clone().with_model(None).model, "gpt-4o");
        assert_eq!(config.clone().with_model(Some("  ".to_string())).model, "gpt-4o");
        assert_eq!(config.with_model(Some("o3-mini".to_string())).model, "o3-mini");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("sk-secret", "gpt-4o", DEFAULT_BASE_URL);
        let debug = format!("{:?}", config);

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_settings_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"store_name": "reports", "poll_interval_ms": 250}"#)
            .unwrap();

        let settings = Settings::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.store_name.as_deref(), Some("reports"));
        assert_eq!(settings.instructions, None);
        assert_eq!(settings.poll_interval_ms, Some(250));
    }

    #[test]
    fn test_settings_unknown_field_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"store": "typo"}"#).unwrap();

        assert!(Settings::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_settings_missing_file() {
        let err = Settings::load("/nonexistent/docask.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn test_settings_load_optional_none() {
        assert_eq!(Settings::load_optional(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_session_config_defaults() {
        let session = Settings::default().session_config("gpt-4o", None);

        assert_eq!(session, SessionConfig::default());
    }

    #[test]
    fn test_session_config_precedence() {
        let settings = Settings {
            store_name: Some("from-file".to_string()),
            instructions: Some("Be brief.".to_string()),
            poll_interval_ms: Some(10),
        };

        let from_file = settings.session_config("m", None);
        assert_eq!(from_file.store_name, "from-file");
        assert_eq!(from_file.instructions, "Be brief.");
        assert_eq!(from_file.poll_interval, Duration::from_millis(10));

        let from_cli = settings.session_config("m", Some("from-cli"));
        assert_eq!(from_cli.store_name, "from-cli");
    }
}
