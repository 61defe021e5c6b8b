//! Runtime configuration from environment variables.
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const APP_DIR: &str = "polyglot-translator";

pub const ENV_API_URL: &str = "TRANSLATOR_API_URL";
pub const ENV_BACKEND: &str = "TRANSLATOR_BACKEND";
pub const ENV_TIMEOUT: &str = "TRANSLATOR_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "TRANSLATOR_DATA_DIR";
pub const ENV_LOG: &str = "TRANSLATOR_LOG";

/// Which translation service the card talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Http,
    /// Offline: renders a localized placeholder instead of calling out.
    Preview,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TRANSLATOR_BACKEND: unknown backend `{0}` (expected http or preview)")]
    Backend(String),
    #[error("TRANSLATOR_TIMEOUT_SECS: `{0}` is not a positive number of seconds")]
    Timeout(String),
    #[error("TRANSLATOR_API_URL: `{0}` must be an http:// or https:// URL with a host")]
    ApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub backend: Backend,
    pub request_timeout: Duration,
    /// Where preferences live; `None` when the platform has no config dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            backend: Backend::Http,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: dirs::config_dir().map(|p| p.join(APP_DIR)),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();

        if let Some(url) = var(ENV_API_URL) {
            let base = url.trim_end_matches('/');
            let host = base.strip_prefix("http://").or_else(|| base.strip_prefix("https://"));
            if host.map_or(true, str::is_empty) {
                return Err(ConfigError::ApiUrl(url));
            }
            cfg.api_base_url = base.to_string();
        }
        if let Some(b) = var(ENV_BACKEND) {
            cfg.backend = match b.to_ascii_lowercase().as_str() {
                "http" => Backend::Http,
                "preview" => Backend::Preview,
                _ => return Err(ConfigError::Backend(b)),
            };
        }
        if let Some(t) = var(ENV_TIMEOUT) {
            let secs = t.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| ConfigError::Timeout(t.clone()))?;
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = var(ENV_DATA_DIR) {
            cfg.data_dir = Some(PathBuf::from(dir));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn cfg(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.api_base_url, "http://localhost:3001");
        assert_eq!(c.backend, Backend::Http);
        assert_eq!(c.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_apply() {
        let c = cfg(&[
            (ENV_API_URL, "https://translate.example.com/"),
            (ENV_BACKEND, "Preview"),
            (ENV_TIMEOUT, "5"),
            (ENV_DATA_DIR, "/tmp/tr"),
        ])
        .unwrap();
        assert_eq!(c.api_base_url, "https://translate.example.com");
        assert_eq!(c.backend, Backend::Preview);
        assert_eq!(c.request_timeout, Duration::from_secs(5));
        assert_eq!(c.data_dir, Some(PathBuf::from("/tmp/tr")));
    }

    #[test]
    fn blank_values_are_unset() {
        assert_eq!(cfg(&[(ENV_BACKEND, "  ")]).unwrap().backend, Backend::Http);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert_eq!(cfg(&[(ENV_BACKEND, "grpc")]), Err(ConfigError::Backend("grpc".into())));
        assert_eq!(cfg(&[(ENV_TIMEOUT, "0")]), Err(ConfigError::Timeout("0".into())));
        assert_eq!(cfg(&[(ENV_API_URL, "localhost:3001")]), Err(ConfigError::ApiUrl("localhost:3001".into())));
    }

    #[test]
    fn scheme_without_host_is_rejected() {
        for url in ["http://", "https:///", "http:////"] {
            assert_eq!(cfg(&[(ENV_API_URL, url)]), Err(ConfigError::ApiUrl(url.into())));
        }
        assert_eq!(cfg(&[(ENV_API_URL, "http://h/")]).unwrap().api_base_url, "http://h");
    }
}
