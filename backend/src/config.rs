use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ANALYSIS_API_URL: &str = "https://api.regolo.ai/v1";
pub const DEFAULT_ANALYSIS_MODEL: &str = "Llama-3.3-70B-Instruct";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddr { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub analysis: AnalysisConfig,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("ANALYSIS_API_KEY").ok_or(ConfigError::Missing("ANALYSIS_API_KEY"))?;
        let api_url = get("ANALYSIS_API_URL").unwrap_or_else(|| DEFAULT_ANALYSIS_API_URL.to_string());
        let model = get("ANALYSIS_MODEL").unwrap_or_else(|| DEFAULT_ANALYSIS_MODEL.to_string());

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidAddr {
            name: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Self {
            bind_addr,
            analysis: AnalysisConfig { api_url, api_key, model },
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("ANALYSIS_API_KEY", "secret")])).unwrap();
        assert_eq!(config.analysis.api_key, "secret");
        assert_eq!(config.analysis.api_url, DEFAULT_ANALYSIS_API_URL);
        assert_eq!(config.analysis.model, DEFAULT_ANALYSIS_MODEL);
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn missing_or_blank_api_key_is_an_error() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("ANALYSIS_API_KEY"))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("ANALYSIS_API_KEY", "  ")])),
            Err(ConfigError::Missing("ANALYSIS_API_KEY"))
        );
    }

    #[test]
    fn overrides_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ANALYSIS_API_KEY", "secret"),
            ("ANALYSIS_API_URL", "https://openrouter.ai/api/v1"),
            ("ANALYSIS_MODEL", "openai/gpt-4o-mini"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();
        assert_eq!(config.analysis.api_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.analysis.model, "openai/gpt-4o-mini");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("ANALYSIS_API_KEY", "secret"),
            ("BIND_ADDR", "localhost"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr { name: "BIND_ADDR", value: "localhost".to_string() }
        );
    }
}
