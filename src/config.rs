// src/config.rs
use std::env;
use std::time::Duration;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the matching service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// `MATCH_API_BASE_URL` overrides the service address (local loopback by
    /// default); `MATCH_API_TIMEOUT_SECS` overrides the request timeout.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MATCH_API_BASE_URL").ok(),
            env::var("MATCH_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match timeout_secs {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!("MATCH_API_TIMEOUT_SECS is not a number, using default");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
