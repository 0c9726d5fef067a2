use crate::error::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variables sent alongside a GraphQL document
pub type Variables = Map<String, Value>;

/// A single GraphQL operation as it goes over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLRequest {
    /// Query document text, sent verbatim
    pub query: String,
    /// Operation variables; omitted from the body when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphQLRequest {
    /// Create a request without variables
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Create a request with the given variables
    pub fn with_variables<S: Into<String>>(query: S, variables: Variables) -> Self {
        Self {
            query: query.into(),
            variables: Some(variables),
        }
    }

    /// Serialize the request into the JSON body posted to the endpoint
    pub fn to_body(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ClientError::invalid_config(format!("Unserializable variables: {e}")))
    }

    /// Name of the first `query` operation in the document, if it has one
    pub fn operation_name(&self) -> Option<&str> {
        let rest = self.query.trim_start().strip_prefix("query")?;
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            return None;
        }
        let name = rest
            .trim_start()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .next()?;
        (!name.is_empty()).then_some(name)
    }
}

/// Location of an error inside the query document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// One entry of a response's `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl ErrorDescriptor {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }
}

/// Decoded GraphQL response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse<T = Value> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDescriptor>>,
}

impl<T> Default for GraphQLResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            errors: None,
        }
    }
}

impl<T> GraphQLResponse<T> {
    /// Create a successful response
    pub fn from_data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Create a response carrying only errors
    pub fn from_errors(errors: Vec<ErrorDescriptor>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    /// Whether the response carries a non-empty `errors` array
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Error messages in array order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.clone())
            .collect()
    }

    /// Give up the payload, raising any `errors` as a single application error.
    ///
    /// Partial data that arrives alongside errors is discarded. A missing
    /// `data` field is not an error and yields `Ok(None)`.
    pub fn into_data(self) -> Result<Option<T>> {
        if self.has_errors() {
            return Err(ClientError::Application {
                messages: self.error_messages(),
            });
        }
        Ok(self.data)
    }
}

impl GraphQLResponse<Value> {
    /// Raise any `errors`, then decode the payload into a concrete shape.
    ///
    /// Errors are checked before the payload, so a response carrying both
    /// errors and oddly shaped data reports the errors. A missing or null
    /// `data` yields `Ok(None)`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>> {
        match self.into_data()? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ClientError::decode(format!("Unexpected data shape: {e}"))),
        }
    }
}
