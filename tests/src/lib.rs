//! Shared fixtures for the end-to-end tests.

use film_graphql::{ClientConfig, EndpointSource, FilmLoaders, GraphQLClient, HttpTransport};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock GraphQL API is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Environment variable name no test ever sets
pub const UNSET_ENDPOINT_ENV: &str = "FILMS_TESTS_ENDPOINT_NEVER_SET";

pub fn endpoint_of(server: &MockServer) -> String {
    format!("{}{}", server.uri(), GRAPHQL_PATH)
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        endpoint: EndpointSource::Url(endpoint_of(server)),
        ..ClientConfig::default()
    }
}

pub fn client_for(server: &MockServer) -> GraphQLClient<HttpTransport> {
    GraphQLClient::from_config(config_for(server)).unwrap()
}

pub fn loaders_for(server: &MockServer) -> FilmLoaders<HttpTransport> {
    FilmLoaders::new(client_for(server))
}

/// Start a server answering every POST to [`GRAPHQL_PATH`] with `status` and a JSON body
pub async fn start_graphql_server(status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Parsed JSON bodies of every request the server received
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fixture_server_records_bodies() {
        let server = start_graphql_server(200, json!({ "data": {} })).await;
        let client = reqwest::Client::new();
        client
            .post(endpoint_of(&server))
            .json(&json!({ "query": "{ a }" }))
            .send()
            .await
            .unwrap();

        assert_eq!(received_bodies(&server).await, vec![json!({ "query": "{ a }" })]);
    }
}
