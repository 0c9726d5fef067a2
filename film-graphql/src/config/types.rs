use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env::VarError;
use url::Url;

/// Environment variable holding the GraphQL endpoint when nothing else is configured
pub const DEFAULT_ENDPOINT_ENV: &str = "STAR_WARS_GRAPHQL_ENDPOINT";

/// Where the GraphQL endpoint URL comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointSource {
    /// Read from the named environment variable every time a request is made
    Env(String),
    /// A fixed URL
    Url(String),
}

impl Default for EndpointSource {
    fn default() -> Self {
        Self::Env(DEFAULT_ENDPOINT_ENV.to_string())
    }
}

impl EndpointSource {
    /// Resolve the endpoint from the process environment
    pub fn resolve(&self) -> Result<Url> {
        let value = match self {
            Self::Env(name) => read_env(name)?,
            Self::Url(_) => None,
        };
        self.resolve_with(|_| value)
    }

    /// Resolve the endpoint using `lookup` in place of the process environment
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Url>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let (raw, origin) = match self {
            Self::Env(name) => (lookup(name), name.as_str()),
            Self::Url(url) => (Some(url.clone()), "endpoint"),
        };

        let raw = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                return Err(ClientError::MissingEndpoint {
                    variable: origin.to_string(),
                })
            }
        };

        parse_endpoint(raw.trim())
    }

    /// Human readable description, used in logs and diagnostics
    pub fn describe(&self) -> String {
        match self {
            Self::Env(name) => format!("${name}"),
            Self::Url(url) => url.clone(),
        }
    }
}

/// Read a variable, treating a value that is not valid UTF-8 as a bad endpoint
fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ClientError::InvalidEndpoint {
            url: raw.to_string_lossy().into_owned(),
            reason: format!("{name} is not valid UTF-8"),
        }),
    }
}

/// Parse and check an endpoint URL
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ClientError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{scheme}', expected http or https"),
        }),
    }
}

/// Runtime configuration of a GraphQL client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Endpoint to send operations to
    pub endpoint: EndpointSource,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout_seconds: Option<u64>,
}

/// On-disk configuration file layout (`films.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub client: ClientSection,
}

/// `[client]` table of the configuration file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientSection {
    /// Fixed endpoint URL
    pub endpoint: Option<String>,
    /// Environment variable to read the endpoint from
    pub endpoint_env: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Headers applied to all requests
    pub headers: Option<BTreeMap<String, String>>,
}

impl TryFrom<ConfigFile> for ClientConfig {
    type Error = ClientError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let section = file.client;
        let endpoint = match (section.endpoint, section.endpoint_env) {
            (Some(_), Some(_)) => {
                return Err(ClientError::invalid_config(
                    "Set either 'endpoint' or 'endpoint_env' in [client], not both",
                ))
            }
            (Some(url), None) => EndpointSource::Url(url),
            (None, Some(name)) => EndpointSource::Env(name),
            (None, None) => EndpointSource::default(),
        };

        Ok(Self {
            endpoint,
            headers: section.headers.unwrap_or_default(),
            timeout_seconds: section.timeout_seconds,
        })
    }
}
