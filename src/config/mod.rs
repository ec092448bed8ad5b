//! Environment-driven configuration

use std::env;
use thiserror::Error;
use url::Url;

pub const DEFAULT_EVALUATION_API_URL: &str = "http://127.0.0.1:8000/api/strategy";
pub const DEFAULT_DATA_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Endpoints of the external services the builder talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Full URL the submission payload is POSTed to
    pub evaluation_url: Url,
    /// Base URL of the dashboard data API (`/api/financial-data`, `/api/trades`)
    pub data_api_url: Url,
}

impl ServiceConfig {
    pub fn new(evaluation_url: &str, data_api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            evaluation_url: parse_url("EVALUATION_API_URL", evaluation_url)?,
            data_api_url: parse_url("DATA_API_URL", data_api_url)?,
        })
    }

    /// Load from `EVALUATION_API_URL` / `DATA_API_URL`, falling back to the local defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let evaluation = env::var("EVALUATION_API_URL")
            .unwrap_or_else(|_| DEFAULT_EVALUATION_API_URL.to_string());
        let data = env::var("DATA_API_URL").unwrap_or_else(|_| DEFAULT_DATA_API_URL.to_string());
        Self::new(&evaluation, &data)
    }
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { var, source })
}
