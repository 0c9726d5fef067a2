use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::GraphQLRequest;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Request};

/// Builds the POST request carrying a GraphQL operation
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    config: ClientConfig,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Build the HTTP request for `operation`.
    ///
    /// The endpoint is resolved here, on every call, so a missing endpoint
    /// fails before anything is sent.
    pub fn build_request(&self, operation: &GraphQLRequest) -> Result<Request> {
        let url = self.config.endpoint.resolve()?;
        let body = operation.to_body()?;

        let mut request_builder = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json");

        if !self
            .config
            .headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(ACCEPT.as_str()))
        {
            request_builder = request_builder.header(ACCEPT, "application/json");
        }

        for (name, value) in &self.config.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            request_builder = request_builder.header(name.as_str(), value.as_str());
        }

        request_builder
            .body(body)
            .build()
            .map_err(|e| ClientError::invalid_config(format!("Failed to build request: {e}")))
    }

    /// Generate a curl command equivalent for the request
    pub fn generate_curl_command(&self, request: &Request) -> String {
        let mut result = String::from("curl -X ");
        result.push_str(request.method().as_str());

        for (name, value) in request.headers() {
            if let Ok(value_str) = value.to_str() {
                result.push_str(" -H '");
                result.push_str(name.as_str());
                result.push_str(": ");
                result.push_str(value_str);
                result.push('\'');
            }
        }

        if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
            result.push_str(" -d '");
            result.push_str(&String::from_utf8_lossy(body).replace('\'', "'\\''"));
            result.push('\'');
        }

        result.push_str(" '");
        result.push_str(request.url().as_str());
        result.push('\'');

        result
    }
}
