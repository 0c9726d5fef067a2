use crate::config::{ClientConfig, ConfigValidatorImpl};
use crate::error::{ClientError, Result};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::{ConfigValidator, Transport};
use crate::types::{GraphQLRequest, GraphQLResponse};
use reqwest::Client;
use std::time::Duration;

/// GraphQL-over-HTTP transport backed by reqwest
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl HttpTransport {
    /// Create a new HTTP transport with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        ConfigValidatorImpl::new().validate(&config)?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::invalid_config(format!("Failed to create HTTP client: {e}")))?;

        Self::with_client(client, config)
    }

    /// Create a transport that shares an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Result<Self> {
        ConfigValidatorImpl::new().validate(&config)?;
        let request_builder = RequestBuilderImpl::new(client.clone(), config);

        Ok(Self {
            client,
            request_builder,
            response_converter: ResponseConverterImpl::new(),
        })
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, operation: &GraphQLRequest) -> Result<GraphQLResponse> {
        let request = self.request_builder.build_request(operation)?;
        let endpoint = request.url().to_string();
        let operation_name = operation.operation_name().unwrap_or("anonymous");

        tracing::debug!(
            operation = operation_name,
            %endpoint,
            curl = %self.request_builder.generate_curl_command(&request),
            "sending GraphQL request"
        );

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(operation = operation_name, %endpoint, "Error fetching data from GraphQL API: {e}");
            ClientError::network(format!("Request failed: {e}"))
        })?;

        let result = self.response_converter.convert_response(response).await;
        match &result {
            Ok(body) if body.has_errors() => tracing::debug!(
                operation = operation_name,
                errors = body.error_messages().len(),
                "GraphQL API returned errors"
            ),
            Ok(_) => tracing::debug!(operation = operation_name, "GraphQL request succeeded"),
            Err(e) => {
                tracing::error!(operation = operation_name, %endpoint, "Error fetching data from GraphQL API: {e}")
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointSource;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        let config = ClientConfig {
            endpoint: EndpointSource::Url(format!("{}/graphql", server.uri())),
            ..ClientConfig::default()
        };
        HttpTransport::new(config).unwrap()
    }

    #[test]
    fn test_transport_creation_with_timeout() {
        let config = ClientConfig::builder().timeout(60).build().unwrap();
        assert!(HttpTransport::new(config).is_ok());
    }

    #[test]
    fn test_transport_rejects_invalid_config() {
        let mut config = ClientConfig {
            endpoint: EndpointSource::Url("http://localhost:4000/graphql".to_string()),
            ..ClientConfig::default()
        };
        config
            .headers
            .insert("content-type".to_string(), "text/plain".to_string());

        let err = HttpTransport::new(config.clone()).err().unwrap();
        assert!(matches!(err, ClientError::InvalidConfig { .. }));

        let err = HttpTransport::with_client(Client::new(), config).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let config = ClientConfig {
            timeout_seconds: Some(0),
            ..ClientConfig::default()
        };
        assert!(HttpTransport::with_client(Client::new(), config).is_err());
    }

    #[tokio::test]
    async fn test_posts_query_and_variables() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "query": "query Film($id: ID) { film(id: $id) { title } }",
                "variables": { "id": "1" }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": { "film": { "title": "A New Hope" } } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut variables = crate::types::Variables::new();
        variables.insert("id".to_string(), json!("1"));
        let request = GraphQLRequest::with_variables(
            "query Film($id: ID) { film(id: $id) { title } }",
            variables,
        );

        let response = transport_for(&server).execute(&request).await.unwrap();
        assert_eq!(response.data.unwrap()["film"]["title"], "A New Hope");
    }

    #[tokio::test]
    async fn test_status_failure_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .execute(&GraphQLRequest::new("{ allFilms { totalCount } }"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_missing_endpoint_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = ClientConfig {
            endpoint: EndpointSource::Env("FILMS_TEST_NEVER_SET_7f3a".to_string()),
            ..ClientConfig::default()
        };
        let err = HttpTransport::new(config)
            .unwrap()
            .execute(&GraphQLRequest::new("{ allFilms { totalCount } }"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
