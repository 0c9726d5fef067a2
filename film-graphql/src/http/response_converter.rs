use crate::error::{ClientError, Result};
use crate::types::GraphQLResponse;
use reqwest::{Response, StatusCode};

/// Turns an HTTP response into a decoded GraphQL body or a transport error
#[derive(Clone, Default)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    pub async fn convert_response(&self, response: Response) -> Result<GraphQLResponse> {
        let status = response.status();
        if !status.is_success() {
            // Best effort: the status is reported even when the body cannot be read
            let body = response.bytes().await.unwrap_or_default();
            return Self::classify(status, &body);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::network(format!("Failed to read response body: {e}")))?;

        Self::classify(status, &body)
    }

    /// Classify a status and raw body.
    ///
    /// A failing status wins over whatever the body contains, so an HTML
    /// error page is reported as a status failure and never parsed.
    pub fn classify(status: StatusCode, body: &[u8]) -> Result<GraphQLResponse> {
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(body).into_owned(),
            });
        }

        serde_json::from_slice(body).map_err(|e| {
            ClientError::decode(format!("Response body is not a GraphQL JSON object: {e}"))
        })
    }
}
