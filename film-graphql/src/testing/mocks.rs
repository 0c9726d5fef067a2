use crate::error::{ClientError, Result};
use crate::traits::Transport;
use crate::types::{GraphQLRequest, GraphQLResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What a [`MockTransport`] answers with
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(GraphQLResponse),
    Status { status: u16, body: String },
    Network(String),
}

impl MockReply {
    fn into_result(self) -> Result<GraphQLResponse> {
        match self {
            MockReply::Response(response) => Ok(response),
            MockReply::Status { status, body } => Err(ClientError::Status {
                status,
                status_text: reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or_default()
                    .to_string(),
                body,
            }),
            MockReply::Network(message) => Err(ClientError::network(message)),
        }
    }
}

/// Mock transport that records every request and replays queued replies in order
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<GraphQLRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: GraphQLResponse) -> Self {
        self.with_reply(MockReply::Response(response))
    }

    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(reply);
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: &GraphQLRequest) -> Result<GraphQLResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match reply {
            Some(reply) => reply.into_result(),
            None => Err(ClientError::network(format!(
                "Mock response not found for operation: {}",
                request.operation_name().unwrap_or("anonymous")
            ))),
        }
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use crate::films::{Film, FilmSummary, Species, SpeciesConnection};
    use serde_json::{json, Value};

    pub fn create_film_summary(id: &str, title: &str, species: &[&str]) -> FilmSummary {
        FilmSummary {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            release_date: Some("1977-05-25".to_string()),
            director: Some("George Lucas".to_string()),
            species_connection: Some(SpeciesConnection {
                species: Some(
                    species
                        .iter()
                        .map(|name| {
                            Some(Species {
                                name: Some(name.to_string()),
                            })
                        })
                        .collect(),
                ),
            }),
        }
    }

    pub fn create_film(title: &str) -> Film {
        Film {
            title: Some(title.to_string()),
            director: Some("George Lucas".to_string()),
            producers: Some(vec![Some("Gary Kurtz".to_string()), Some("Rick McCallum".to_string())]),
            release_date: Some("1977-05-25".to_string()),
            opening_crawl: Some("It is a period of civil war.".to_string()),
        }
    }

    /// `AllFilms` response body with the given films
    pub fn all_films_body(films: &[FilmSummary]) -> Value {
        json!({ "data": { "allFilms": { "films": films } } })
    }

    /// `Film` response body for the given film
    pub fn film_body(film: Option<&Film>) -> Value {
        json!({ "data": { "film": film } })
    }

    /// Body carrying only the given error messages
    pub fn errors_body(messages: &[&str]) -> Value {
        let errors: Vec<Value> = messages.iter().map(|m| json!({ "message": m })).collect();
        json!({ "errors": errors })
    }
}
