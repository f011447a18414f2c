//! Configuration management for the tutor orchestrator.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Parameter extraction tuning.
    pub extraction: ExtractionConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Problems found while reading the environment. Loading happens before
    /// the subscriber exists, so `main` logs these once logging is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the rule-based extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Number of most recent chat turns scanned for topic keywords.
    pub topic_history_window: usize,

    /// Number of most recent chat turns scanned for subject keywords.
    pub subject_history_window: usize,

    /// Longest current message, in characters, the transports accept.
    pub max_message_chars: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            topic_history_window: 3,
            subject_history_window: 2,
            max_message_chars: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tutor-orchestrator".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            extraction: ExtractionConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TUTOR_`.
    /// For example: `TUTOR_SERVER_NAME`, `TUTOR_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Ok(name) = std::env::var("TUTOR_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TUTOR_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(window) = env_usize("TUTOR_TOPIC_WINDOW", &mut warnings) {
            config.extraction.topic_history_window = window;
        }

        if let Some(window) = env_usize("TUTOR_SUBJECT_WINDOW", &mut warnings) {
            config.extraction.subject_history_window = window;
        }

        if let Some(max_chars) = env_usize("TUTOR_MAX_MESSAGE_CHARS", &mut warnings) {
            config.extraction.max_message_chars = max_chars;
        }

        config.transport = TransportConfig::from_env(&mut warnings);
        config.warnings = warnings;

        config
    }

    /// Reject settings the extractor cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.max_message_chars == 0 {
            return Err(Error::config("max_message_chars must be greater than zero"));
        }
        Ok(())
    }
}

/// Read a numeric environment variable. Values that do not parse are
/// skipped and reported through `warnings`.
fn env_usize(key: &str, warnings: &mut Vec<String>) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!(
                "Ignoring {}={:?}: expected a non-negative integer",
                key, raw
            ));
            None
        }
    }
}

// Mutex to ensure env var tests run serially, shared with the transport tests
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_windows_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TUTOR_TOPIC_WINDOW", "5");
            std::env::set_var("TUTOR_SUBJECT_WINDOW", "1");
        }
        let config = Config::from_env();
        assert_eq!(config.extraction.topic_history_window, 5);
        assert_eq!(config.extraction.subject_history_window, 1);
        assert!(config.warnings.is_empty());
        unsafe {
            std::env::remove_var("TUTOR_TOPIC_WINDOW");
            std::env::remove_var("TUTOR_SUBJECT_WINDOW");
        }
    }

    #[test]
    fn test_invalid_number_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TUTOR_MAX_MESSAGE_CHARS", "lots");
        }
        let config = Config::from_env();
        assert_eq!(config.extraction.max_message_chars, 1000);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("TUTOR_MAX_MESSAGE_CHARS"));
        unsafe {
            std::env::remove_var("TUTOR_MAX_MESSAGE_CHARS");
        }
    }

    #[test]
    fn test_default_extraction_config() {
        let config = Config::default();
        assert_eq!(config.extraction.topic_history_window, 3);
        assert_eq!(config.extraction.subject_history_window, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_message_length() {
        let mut config = Config::default();
        config.extraction.max_message_chars = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
