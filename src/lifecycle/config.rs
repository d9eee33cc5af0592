//! Client configuration loaded from the environment.

use cfn_framework::HandlerError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading [`ProfilesClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

impl From<ConfigError> for HandlerError {
    fn from(err: ConfigError) -> Self {
        HandlerError::InvalidRequest(err.to_string())
    }
}

/// Overrides applied on top of the default AWS SDK configuration.
///
/// Unset fields keep the SDK defaults (region from the environment/profile
/// chain, the public endpoint, no operation timeout).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilesClientConfig {
    /// Region override.
    pub region: Option<String>,
    /// Endpoint override (e.g. LocalStack).
    pub endpoint: Option<String>,
    /// Timeout for a whole operation, including the SDK's own retries.
    pub operation_timeout: Option<Duration>,
}

impl ProfilesClientConfig {
    pub const REGION_VAR: &'static str = "CUSTOMER_PROFILES_REGION";
    pub const ENDPOINT_VAR: &'static str = "CUSTOMER_PROFILES_ENDPOINT";
    pub const TIMEOUT_VAR: &'static str = "CUSTOMER_PROFILES_TIMEOUT_MS";

    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let operation_timeout = match read(Self::TIMEOUT_VAR) {
            Some(value) => {
                let millis = value.parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                    var: Self::TIMEOUT_VAR,
                    value: value.clone(),
                })?;
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        Ok(Self {
            region: read(Self::REGION_VAR),
            endpoint: read(Self::ENDPOINT_VAR),
            operation_timeout,
        })
    }
}
