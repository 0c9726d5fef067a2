use crate::config::types::{ClientConfig, EndpointSource};
use crate::error::{ClientError, Result};
use crate::traits::ConfigValidator;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use std::collections::HashSet;

/// Configuration validator implementation
#[derive(Debug, Default)]
pub struct ConfigValidatorImpl;

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }
}

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ClientConfig;

    /// Check everything that can be checked without touching the environment.
    ///
    /// Env-based endpoints are not resolved here; a missing variable is
    /// reported on first use.
    fn validate(&self, config: &ClientConfig) -> Result<()> {
        match &config.endpoint {
            EndpointSource::Env(name) if name.trim().is_empty() => {
                return Err(ClientError::invalid_config(
                    "Endpoint environment variable name must not be empty",
                ));
            }
            EndpointSource::Url(url) if !url.trim().is_empty() => {
                crate::config::types::parse_endpoint(url.trim())?;
            }
            _ => {}
        }

        if config.timeout_seconds == Some(0) {
            return Err(ClientError::invalid_config(
                "timeout_seconds must be greater than zero",
            ));
        }

        let mut seen = HashSet::new();
        for (name, value) in &config.headers {
            let header = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ClientError::invalid_config(format!("Invalid header name '{name}'"))
            })?;
            if header == CONTENT_TYPE {
                return Err(ClientError::invalid_config(
                    "Content-Type is always application/json and cannot be overridden",
                ));
            }
            if !seen.insert(header) {
                return Err(ClientError::invalid_config(format!(
                    "Header '{name}' is configured more than once"
                )));
            }
            HeaderValue::from_str(value).map_err(|_| {
                ClientError::invalid_config(format!("Invalid value for header '{name}'"))
            })?;
        }

        Ok(())
    }
}
