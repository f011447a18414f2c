//! Which transport the binary serves on, chosen by `TUTOR_TRANSPORT`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio or http");

/// The transport selected for this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// REST API for tutoring front-ends.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the REST API.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Answer cross-origin requests from browser front-ends.
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `TUTOR_HTTP_HOST`, `TUTOR_HTTP_PORT` and `TUTOR_HTTP_CORS` over the defaults.
    fn from_env(warnings: &mut Vec<String>) -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("TUTOR_HTTP_HOST") {
            config.host = host;
        }

        if let Ok(raw) = std::env::var("TUTOR_HTTP_PORT") {
            match raw.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warnings.push(format!(
                    "Ignoring TUTOR_HTTP_PORT={:?}: expected a port number",
                    raw
                )),
            }
        }

        if let Ok(raw) = std::env::var("TUTOR_HTTP_CORS") {
            config.enable_cors = !matches!(
                raw.trim().to_lowercase().as_str(),
                "false" | "0" | "off" | "no"
            );
        }

        config
    }
}

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(all(feature = "http", not(feature = "stdio")))]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

impl TransportConfig {
    /// Read the transport from the environment. Unknown names, or names of
    /// transports compiled out of this build, fall back with a warning.
    pub fn from_env(warnings: &mut Vec<String>) -> Self {
        let requested = std::env::var("TUTOR_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match requested.as_str() {
            "" => Self::fallback(warnings),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env(warnings)),
            other => {
                let fallback = Self::fallback(warnings);
                warnings.push(format!(
                    "Unknown or disabled transport {:?}, serving {} instead",
                    other, fallback
                ));
                fallback
            }
        }
    }

    #[cfg(feature = "stdio")]
    fn fallback(_warnings: &mut Vec<String>) -> Self {
        Self::Stdio
    }

    #[cfg(all(feature = "http", not(feature = "stdio")))]
    fn fallback(warnings: &mut Vec<String>) -> Self {
        Self::Http(HttpConfig::from_env(warnings))
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio (MCP)"),
            #[cfg(feature = "http")]
            Self::Http(config) => write!(f, "http (REST on {})", config.bind_address()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ENV_TEST_LOCK;

    fn with_env<T>(vars: &[(&str, &str)], read: impl FnOnce() -> T) -> T {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }
        let result = read();
        unsafe {
            for (key, _) in vars {
                std::env::remove_var(key);
            }
        }
        result
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unset_transport_is_stdio() {
        let mut warnings = Vec::new();
        let config = with_env(&[], || TransportConfig::from_env(&mut warnings));
        assert_eq!(config, TransportConfig::Stdio);
        assert_eq!(config.to_string(), "stdio (MCP)");
        assert!(warnings.is_empty());
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back_with_warning() {
        let mut warnings = Vec::new();
        let config = with_env(&[("TUTOR_TRANSPORT", "carrier-pigeon")], || {
            TransportConfig::from_env(&mut warnings)
        });
        assert_eq!(config, TransportConfig::Stdio);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("carrier-pigeon"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_settings_from_env() {
        let mut warnings = Vec::new();
        let config = with_env(
            &[
                ("TUTOR_TRANSPORT", "HTTP"),
                ("TUTOR_HTTP_HOST", "0.0.0.0"),
                ("TUTOR_HTTP_PORT", "9000"),
                ("TUTOR_HTTP_CORS", "off"),
            ],
            || TransportConfig::from_env(&mut warnings),
        );
        let expected = HttpConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            enable_cors: false,
        };
        assert_eq!(config.to_string(), "http (REST on 0.0.0.0:9000)");
        assert_eq!(config, TransportConfig::Http(expected));
        assert!(warnings.is_empty());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_bad_port_keeps_default_with_warning() {
        let mut warnings = Vec::new();
        let config = with_env(
            &[("TUTOR_TRANSPORT", "http"), ("TUTOR_HTTP_PORT", "eighty")],
            || TransportConfig::from_env(&mut warnings),
        );
        assert_eq!(config, TransportConfig::Http(HttpConfig::default()));
        assert!(warnings[0].contains("TUTOR_HTTP_PORT"));
    }
}
