//! Process-wide settings, read once at startup.

use std::time::Duration;

use crate::constants::CWA_API_BASE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// CWA authorization key. `None` keeps the server up but disables every weather route.
    pub api_key: Option<String>,
    pub base_url: String,
    pub bind_addr: String,
    pub port: u16,
    /// Per-request timeout applied to upstream calls
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `CWA_API_KEY`, `CWA_API_BASE`, `BIND_ADDR`, `PORT` and `UPSTREAM_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let timeout_secs = var("UPSTREAM_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key: var("CWA_API_KEY"),
            base_url: var("CWA_API_BASE")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| CWA_API_BASE.to_string()),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        }
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, CWA_API_BASE);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("CWA_API_KEY", "   ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CWA_API_KEY", "CWA-123"),
            ("CWA_API_BASE", "http://localhost:9000/api/"),
            ("PORT", "8081"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("CWA-123"));
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.port, 8081);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, 3000);
    }
}
