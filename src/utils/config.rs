use std::time::Duration;

use crate::utils::error::{SponsorsError, SponsorsResult};

/// Host every sponsors lookup is bound to
pub const DEFAULT_HOSTNAME: &str = "github.com";

/// Request timeout applied by the HTTP client when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const TIMEOUT_VAR: &str = "SPONSORS_HTTP_TIMEOUT";

/// Settings for the API transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Create a configuration with no token
    pub fn new() -> Self {
        Self {
            token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> SponsorsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> SponsorsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        config.token = TOKEN_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let seconds = raw.trim().parse::<u64>().map_err(|_| {
                SponsorsError::Configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_VAR, raw
                ))
            })?;
            if seconds == 0 {
                return Err(SponsorsError::Configuration(format!(
                    "{} must be greater than 0",
                    TIMEOUT_VAR
                )));
            }
            config.timeout_seconds = seconds;
        }

        Ok(config)
    }

    /// Set the auth token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Set timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `hostname` is the public GitHub host
pub fn is_default_host(hostname: &str) -> bool {
    hostname.eq_ignore_ascii_case(DEFAULT_HOSTNAME)
}
