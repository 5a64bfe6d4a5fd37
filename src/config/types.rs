//! Core configuration types.

use super::defaults::{default_server_name, default_server_version};
use super::{LimitsConfig, ListenConfig};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<super::ValidationError>),
}

fn format_errors(errors: &[super::ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Server configuration.
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server information.
    #[serde(default)]
    pub server: ServerConfig,
    /// Network listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Per-connection limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(content)?;
        super::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name used as the prefix of server-originated lines.
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Version string reported in the welcome burst.
    #[serde(default = "default_server_version")]
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.server.name, "irc.local");
        assert_eq!(config.server.version, "1.0");
        assert_eq!(config.listen.address.port(), 6667);
        assert_eq!(config.limits.max_line_length, 512);
        assert_eq!(config.limits.send_queue, 256);
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: Config = r#"
            [server]
            name = "chat.example.org"

            [limits]
            send_queue = 32
        "#
        .parse()
        .unwrap();

        assert_eq!(config.server.name, "chat.example.org");
        assert_eq!(config.server.version, "1.0");
        assert_eq!(config.limits.send_queue, 32);
        assert_eq!(config.limits.send_timeout_ms, 5_000);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listen]\naddress = \"127.0.0.1:7000\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.listen.address.to_string(), "127.0.0.1:7000");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = "[server\nname = 1".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = "[limits]\nsend_queue = 0".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
