//! Backend communication: the `/token` and `/ask` adapter

pub mod api;
pub mod error;
pub mod types;

pub use api::{BackendClient, RagApi, DEFAULT_API_URL};
pub use error::{AuthError, QueryError};
pub use types::{AnswerResult, Credentials, Query, Retriever, SourceRecord, Token};
