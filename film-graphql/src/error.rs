use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for film-graphql operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure tier of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid endpoint and other local setup problems. Never retried.
    Configuration,
    /// The HTTP exchange itself failed: I/O, non-success status or an undecodable body.
    Transport,
    /// A well-formed response carried a non-empty `errors` array.
    Application,
}

/// Error types for GraphQL transport and loader operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("GraphQL endpoint is not configured: {variable} is not set")]
    MissingEndpoint { variable: String },

    #[error("Invalid GraphQL endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Network error: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Failed to decode GraphQL response: {message}")]
    Decode { message: String },

    #[error("{}", .messages.join(", "))]
    Application { messages: Vec<String> },
}

impl ClientError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Which failure tier this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEndpoint { .. }
            | Self::InvalidEndpoint { .. }
            | Self::InvalidConfig { .. }
            | Self::ConfigNotFound { .. }
            | Self::Io(_) => ErrorKind::Configuration,
            Self::Network { .. } | Self::Status { .. } | Self::Decode { .. } => {
                ErrorKind::Transport
            }
            Self::Application { .. } => ErrorKind::Application,
        }
    }

    /// Status code of a failed HTTP exchange, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingEndpoint { variable } => {
                format!("Set {variable} to the URL of the Star Wars GraphQL API")
            }
            Self::Status {
                status,
                status_text,
                body,
            } if !body.trim().is_empty() => {
                format!("Network error: {status} {status_text} ({})", body.trim())
            }
            Self::Application { messages } => {
                format!("GraphQL API returned errors: {}", messages.join(", "))
            }
            other => other.to_string(),
        }
    }
}
