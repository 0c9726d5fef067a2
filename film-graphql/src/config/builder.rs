use crate::config::types::{ClientConfig, EndpointSource};
use crate::config::validator::ConfigValidatorImpl;
use crate::error::Result;
use crate::traits::ConfigValidator;
use std::collections::BTreeMap;

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: EndpointSource,
    headers: BTreeMap<String, String>,
    timeout_seconds: Option<u64>,
}

impl ClientConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed endpoint URL
    #[must_use]
    pub fn endpoint<S: Into<String>>(mut self, url: S) -> Self {
        self.endpoint = EndpointSource::Url(url.into());
        self
    }

    /// Read the endpoint from the named environment variable at call time
    #[must_use]
    pub fn endpoint_env<S: Into<String>>(mut self, variable: S) -> Self {
        self.endpoint = EndpointSource::Env(variable.into());
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            endpoint: self.endpoint,
            headers: self.headers,
            timeout_seconds: self.timeout_seconds,
        };
        ConfigValidatorImpl::new().validate(&config)?;
        Ok(config)
    }
}
