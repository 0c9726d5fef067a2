//! Route-level loaders: one catalog operation each, projected to what a view renders.

use crate::client::GraphQLClient;
use crate::documents::Operation;
use crate::error::Result;
use crate::films::{AllFilmsData, Film, FilmData, FilmSummary};
use crate::http::HttpTransport;
use crate::traits::Transport;
use crate::types::Variables;
use serde_json::Value;

/// Loaders for the film list and film detail routes
#[derive(Clone)]
pub struct FilmLoaders<T: Transport = HttpTransport> {
    client: GraphQLClient<T>,
}

impl FilmLoaders<HttpTransport> {
    /// Loaders over the process-wide shared client
    pub fn shared() -> Result<Self> {
        Ok(Self::new(crate::client::shared()?.clone()))
    }
}

impl<T: Transport> FilmLoaders<T> {
    pub fn new(client: GraphQLClient<T>) -> Self {
        Self { client }
    }

    /// All films, in API order.
    ///
    /// An absent `allFilms` or `films` field gives an empty list; null
    /// entries are skipped.
    pub async fn all_films(&self) -> Result<Vec<FilmSummary>> {
        let data: Option<AllFilmsData> = self.client.run(Operation::AllFilms, None).await?;

        Ok(data
            .and_then(|data| data.all_films)
            .and_then(|connection| connection.films)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect())
    }

    /// A single film by id, `None` when the API has no such film
    pub async fn film(&self, id: &str) -> Result<Option<Film>> {
        let mut variables = Variables::new();
        variables.insert("id".to_string(), Value::String(id.to_string()));

        let data: Option<FilmData> = self.client.run(Operation::Film, Some(variables)).await?;
        Ok(data.and_then(|data| data.film))
    }
}
