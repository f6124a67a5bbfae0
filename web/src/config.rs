//! Page behavior and server settings.
//!
//! `DisplayConfig` is provided through Leptos context by [`crate::app::App`] and
//! read by the landing page. `ServerConfig` is read once by the SSR binary from
//! the environment (after `.env` has been loaded).
//!
//! ## Environment variables
//!
//! - `SLOT_API_UPSTREAM`: absolute URL of the slot endpoint to forward
//!   `/api/time-slots/` to. When unset, no pass-through is mounted.
//! - `SLOT_API_TIMEOUT_SECS`: upstream request timeout (default: 10)

use std::time::Duration;

use shared_types::Normalization;

use crate::error::ConfigError;

/// Path of the time slot endpoint, relative to the page origin.
pub const SLOTS_PATH: &str = "/api/time-slots/";

const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Applied to a successful endpoint response before it is stored.
    pub normalization: Normalization,
    /// Show only the first N slots of each room's row.
    pub slot_limit: Option<usize>,
    /// Show a dismissible banner when the fallback schedule is in use.
    pub surface_fetch_errors: bool,
    pub carousel_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::ForceAvailable,
            slot_limit: None,
            surface_fetch_errors: true,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub slot_upstream: Option<String>,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let slot_upstream = lookup("SLOT_API_UPSTREAM")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let upstream_timeout = match lookup("SLOT_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SLOT_API_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            slot_upstream,
            upstream_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.slot_upstream, None);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_upstream_and_timeout() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SLOT_API_UPSTREAM", " http://localhost:8000/api/time-slots/ "),
            ("SLOT_API_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config.slot_upstream.as_deref(),
            Some("http://localhost:8000/api/time-slots/")
        );
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_upstream_is_ignored() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("SLOT_API_UPSTREAM", "  ")])).unwrap();

        assert_eq!(config.slot_upstream, None);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SLOT_API_TIMEOUT_SECS", "soon")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SLOT_API_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn display_defaults_force_availability() {
        let config = DisplayConfig::default();

        assert_eq!(config.normalization, Normalization::ForceAvailable);
        assert_eq!(config.slot_limit, None);
        assert_eq!(config.carousel_interval_ms, 5000);
    }
}
