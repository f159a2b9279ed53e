//! Client Configuration
//!
//! Settings baked in at build time (`TODO_API_BASE`, `TODO_LOG_LEVEL`).

use std::str::FromStr;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing slash
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        let log_level = log_level
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::from_values(Some("https://todo.example.com/api/"), Some("debug"));
        assert_eq!(config.api_base, "https://todo.example.com/api");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ClientConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config, ClientConfig::default());
    }
}
