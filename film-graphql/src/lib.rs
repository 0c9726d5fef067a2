//! Film GraphQL - client for the Star Wars films GraphQL API
//!
//! This crate sends GraphQL operations over HTTP and exposes loaders that
//! project the responses into the film list and film detail shapes.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Transport
pub mod http;

// Main functionality modules
pub mod client;
pub mod documents;
pub mod films;
pub mod loaders;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use client::{shared, GraphQLClient};
pub use config::{ClientConfig, ClientConfigBuilder, EndpointSource, DEFAULT_ENDPOINT_ENV};
pub use documents::{Operation, ALL_FILMS_QUERY, FILM_QUERY};
pub use error::{ClientError, ErrorKind, Result};
pub use films::{Film, FilmSummary};
pub use http::HttpTransport;
pub use loaders::FilmLoaders;
pub use traits::Transport;
pub use types::{ErrorDescriptor, GraphQLRequest, GraphQLResponse, Variables};

/// Fetch every film using the shared client
pub async fn load_all_films() -> Result<Vec<FilmSummary>> {
    FilmLoaders::shared()?.all_films().await
}

/// Fetch one film by id using the shared client
pub async fn load_film(id: &str) -> Result<Option<Film>> {
    FilmLoaders::shared()?.film(id).await
}
