//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
///
/// Read once at startup and immutable for the process lifetime; handlers
/// never touch the environment directly.
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub api_key: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()?;

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| anyhow::anyhow!("API_BASE_URL environment variable is required"))?;

        // Env name kept for drop-in compatibility with existing deployments.
        let api_key = env::var("REACT_APP_API_KEY")
            .map_err(|_| anyhow::anyhow!("REACT_APP_API_KEY environment variable is required"))?;

        let upstream_timeout = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)?;

        Ok(Self {
            port,
            api_base_url,
            api_key,
            upstream_timeout,
        })
    }
}
