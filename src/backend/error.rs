//! Error types for backend calls
//!
//! One type per endpoint. Transport failures, rejected requests and malformed
//! payloads all surface as the same type so callers only match on which call
//! failed.

use thiserror::Error;

/// Login against `/token` failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login failed ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Login failed: malformed response: {0}")]
    MalformedResponse(String),

    #[error("Login failed: {0}")]
    Transport(String),
}

/// Question against `/ask` failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Ask failed ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Ask failed: malformed response: {0}")]
    MalformedResponse(String),

    #[error("Ask failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// HTTP status of the rejection, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl QueryError {
    /// HTTP status of the rejection, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Transport(e.to_string())
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Transport(e.to_string())
    }
}
