//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the replay tool and tests run with zero
//! configuration.

use std::path::PathBuf;

use chime_shared::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_PAGE_SIZE, DEFAULT_REPLAY_DIR, MAX_PAGE_SIZE,
};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix prepended to every API path (e.g. `api/v1`).
    /// Env: `CHIME_API_PREFIX`
    /// Default: empty
    pub api_prefix: String,

    /// `per_page` sent to list endpoints.
    /// Env: `CHIME_PAGE_SIZE` (1..=100)
    /// Default: `20`
    pub page_size: u32,

    /// Tracing filter used when `RUST_LOG` is unset.
    /// Env: `CHIME_LOG_FILTER`
    pub log_filter: String,

    /// Directory of recorded responses read by the replay transport.
    /// Env: `CHIME_REPLAY_DIR`
    /// Default: `./fixtures`
    pub replay_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            replay_dir: PathBuf::from(DEFAULT_REPLAY_DIR),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prefix) = lookup("CHIME_API_PREFIX") {
            config.api_prefix = prefix.trim_matches('/').to_string();
        }

        if let Some(val) = lookup("CHIME_PAGE_SIZE") {
            match val.parse::<u32>() {
                Ok(n) if (1..=MAX_PAGE_SIZE).contains(&n) => config.page_size = n,
                _ => {
                    tracing::warn!(
                        value = %val,
                        max = MAX_PAGE_SIZE,
                        "Invalid CHIME_PAGE_SIZE, using default"
                    );
                }
            }
        }

        if let Some(filter) = lookup("CHIME_LOG_FILTER") {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }

        if let Some(dir) = lookup("CHIME_REPLAY_DIR") {
            config.replay_dir = PathBuf::from(dir);
        }

        config
    }

    /// Full request path for an API path, with the configured prefix.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.api_prefix.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.api_prefix, path)
        }
    }

    /// Like [`endpoint`](Self::endpoint) with the page size appended.
    pub fn paged_endpoint(&self, path: &str) -> String {
        format!("{}?per_page={}", self.endpoint(path), self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.api_prefix, "");
        assert_eq!(config.replay_dir, PathBuf::from("./fixtures"));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("CHIME_API_PREFIX", "/api/v1/"),
            ("CHIME_PAGE_SIZE", "50"),
            ("CHIME_REPLAY_DIR", "/tmp/recorded"),
        ]));

        assert_eq!(config.api_prefix, "api/v1");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.replay_dir, PathBuf::from("/tmp/recorded"));
    }

    #[test]
    fn test_invalid_page_size_keeps_default() {
        for bad in ["0", "101", "twenty"] {
            let config = ClientConfig::from_lookup(lookup_from(&[("CHIME_PAGE_SIZE", bad)]));
            assert_eq!(config.page_size, 20, "{bad} should be rejected");
        }
    }

    #[test]
    fn test_endpoints() {
        let mut config = ClientConfig::default();
        assert_eq!(config.endpoint("/calls"), "calls");

        config.api_prefix = "api".to_string();
        config.page_size = 10;
        assert_eq!(config.endpoint("users/7"), "api/users/7");
        assert_eq!(config.paged_endpoint("calls"), "api/calls?per_page=10");
    }
}
