use crate::config::ClientConfig;
use crate::documents::Operation;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::traits::Transport;
use crate::types::{GraphQLRequest, GraphQLResponse, Variables};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

static SHARED: OnceCell<GraphQLClient> = OnceCell::new();

/// Process-wide client built from the default configuration.
///
/// Constructed on first access and reused for the lifetime of the process.
/// The endpoint is still read from the environment on every request.
pub fn shared() -> Result<&'static GraphQLClient> {
    SHARED.get_or_try_init(|| {
        tracing::debug!("initialising shared GraphQL client");
        GraphQLClient::from_config(ClientConfig::default())
    })
}

/// GraphQL client over any [`Transport`]
#[derive(Clone)]
pub struct GraphQLClient<T: Transport = HttpTransport> {
    transport: T,
}

impl GraphQLClient<HttpTransport> {
    /// Create an HTTP-backed client
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> GraphQLClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one operation and return the raw response, `errors` included
    pub async fn request(
        &self,
        query: &str,
        variables: Option<Variables>,
    ) -> Result<GraphQLResponse> {
        let request = GraphQLRequest {
            query: query.to_string(),
            variables,
        };
        self.transport.execute(&request).await
    }

    /// Send one operation and decode its `data` into `D`.
    ///
    /// Any `errors` are raised as one application error before the payload
    /// is looked at. A missing or null `data` yields `Ok(None)`.
    pub async fn query<D: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Variables>,
    ) -> Result<Option<D>> {
        self.request(query, variables).await?.decode()
    }

    /// Run a catalog operation
    pub async fn run<D: DeserializeOwned>(
        &self,
        operation: Operation,
        variables: Option<Variables>,
    ) -> Result<Option<D>> {
        self.query(operation.document(), variables).await
    }
}
