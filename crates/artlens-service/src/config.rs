//! Service configuration
//!
//! All settings come from environment variables with defaults suitable for
//! local development; nothing is read after startup.

use std::env;
use std::time::Duration;

/// Default public IPFS gateway
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs/";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

/// Default bound on a single gateway fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Runtime configuration for the analysis service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen port
    pub port: u16,
    /// Base URL of the object gateway, trailing slash included
    pub gateway_url: String,
    /// Per-request bound on the gateway fetch
    pub fetch_timeout: Duration,
}

impl ServiceConfig {
    /// Build configuration from the environment
    ///
    /// Reads `ARTLENS_PORT`, `ARTLENS_GATEWAY_URL`, and
    /// `ARTLENS_FETCH_TIMEOUT_SECS`; malformed values fall back to the
    /// defaults rather than aborting startup.
    pub fn from_env() -> Self {
        let port = env::var("ARTLENS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let gateway_url =
            env::var("ARTLENS_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());

        let fetch_timeout = env::var("ARTLENS_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));

        Self {
            port,
            gateway_url,
            fetch_timeout,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();

        assert_eq!(config.port, 3001);
        assert_eq!(config.gateway_url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
    }
}
