use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::shared::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
}

/// Where the face service lives. Every screen resolves its endpoint through
/// the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
    request_timeout: Option<Duration>,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let value = base_url.trim();
        let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                value: value.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        // Endpoints are appended to the path, so anything after it would be lost.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::InvalidUrl {
                value: value.to_string(),
                reason: "query strings and fragments are not allowed".to_string(),
            });
        }
        Ok(Self {
            base_url: url,
            request_timeout: None,
        })
    }

    /// Resolves the base URL from an explicit value, then `FACEGATE_BACKEND_URL`,
    /// then the local default.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let from_env = std::env::var(BACKEND_URL_ENV).ok();
        Self::resolve_from(explicit, from_env.as_deref())
    }

    pub fn resolve_from(explicit: Option<&str>, from_env: Option<&str>) -> Result<Self, ConfigError> {
        let value = [explicit, from_env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL);
        log::debug!("Using backend at {value}");
        Self::new(value)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Turns a server-relative reference (`/media/x.png`) into an absolute
    /// URL under the base. Absolute http(s) references are returned as is.
    pub fn resolve_reference(&self, reference: &str) -> Result<Url, ConfigError> {
        let reference = reference.trim();
        if let Ok(url) = Url::parse(reference) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let path = reference.trim_start_matches('/');
        let joined = format!("{base}/{path}");
        Url::parse(&joined).map_err(|e| ConfigError::InvalidUrl {
            value: joined.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::explicit_wins(Some("http://a:1"), Some("http://b:2"), "http://a:1/")]
    #[case::env_when_no_explicit(None, Some("http://b:2"), "http://b:2/")]
    #[case::blank_explicit_falls_through(Some("  "), Some("http://b:2"), "http://b:2/")]
    #[case::default_when_nothing(None, None, "http://127.0.0.1:8000/")]
    #[case::blank_env_uses_default(None, Some(""), "http://127.0.0.1:8000/")]
    fn test_resolution_priority(
        #[case] explicit: Option<&str>,
        #[case] env: Option<&str>,
        #[case] expected: &str,
    ) {
        let config = BackendConfig::resolve_from(explicit, env).unwrap();
        assert_eq!(config.base_url().as_str(), expected);
    }

    #[rstest]
    #[case::not_a_url("not a url")]
    #[case::ftp("ftp://example.com")]
    #[case::file("file:///tmp/backend")]
    #[case::query("http://h/?x=1")]
    #[case::fragment("http://h/api#top")]
    #[case::empty_query("http://h/?")]
    fn test_rejects_invalid_base(#[case] value: &str) {
        assert!(matches!(
            BackendConfig::new(value),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_joins_onto_origin() {
        let config = BackendConfig::new("http://127.0.0.1:8000").unwrap();
        let url = config.resolve_reference("/detection/face-verify/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/detection/face-verify/");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let config = BackendConfig::new("https://faces.example.com/api/").unwrap();
        let url = config.resolve_reference("/media/x.png").unwrap();
        assert_eq!(url.as_str(), "https://faces.example.com/api/media/x.png");
    }

    #[test]
    fn test_relative_reference_without_leading_slash() {
        let config = BackendConfig::new("http://host:9000").unwrap();
        let url = config.resolve_reference("media/x.png").unwrap();
        assert_eq!(url.as_str(), "http://host:9000/media/x.png");
    }

    #[test]
    fn test_absolute_reference_is_kept() {
        let config = BackendConfig::new("http://host:9000").unwrap();
        let url = config
            .resolve_reference("https://cdn.example.com/media/x.png")
            .unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/media/x.png");
    }

    #[test]
    fn test_timeout_defaults_to_none() {
        let config = BackendConfig::new("http://host").unwrap();
        assert_eq!(config.request_timeout(), None);
        let config = config.with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }
}
