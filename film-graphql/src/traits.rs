use crate::error::Result;
use crate::types::{GraphQLRequest, GraphQLResponse};
use std::future::Future;

/// Trait for GraphQL transport implementations
pub trait Transport: Send + Sync + Clone {
    /// Perform exactly one GraphQL operation and return the decoded body.
    ///
    /// The response's `errors` array is passed through untouched.
    fn execute(
        &self,
        request: &GraphQLRequest,
    ) -> impl Future<Output = Result<GraphQLResponse>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
