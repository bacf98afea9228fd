//! HTTP client for the Python QA backend

use std::future::Future;

use reqwest::{Client, Response};
use tracing::{debug, warn};

use super::error::{AuthError, QueryError};
use super::types::{AnswerResult, Credentials, Query, Token, TokenResponse};

/// Default address of the FastAPI backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Calls the session needs from the backend
///
/// Implemented by [`BackendClient`]; tests substitute their own.
pub trait RagApi {
    /// Exchange credentials for a bearer token
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Token, AuthError>> + Send;

    /// Ask a question against the selected retrievers
    fn ask(&self, query: &Query, token: &Token) -> impl Future<Output = Result<AnswerResult, QueryError>> + Send;
}

/// Client for communicating with the Python FastAPI backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log in with a URL-encoded form, returning the access token
    pub async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        let url = format!("{}/token", self.base_url);
        debug!(%url, "Requesting access token");

        let response = self
            .client
            .post(&url)
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?;

        let (status, body) = read_body(response).await.map_err(AuthError::from)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Login rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        match payload.access_token {
            Some(token) if !token.is_empty() => {
                debug!(token_type = ?payload.token_type, "Login succeeded");
                Ok(Token::new(token))
            }
            _ => {
                warn!("Login response did not include access_token");
                Err(AuthError::MalformedResponse(
                    "response did not include access_token".to_string(),
                ))
            }
        }
    }

    /// Send a question with the bearer token, returning the answer and its sources
    pub async fn ask(&self, query: &Query, token: &Token) -> Result<AnswerResult, QueryError> {
        let url = format!("{}/ask", self.base_url);
        debug!(%url, sources = query.sources().len(), "Submitting question");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(query)
            .send()
            .await?;

        let (status, body) = read_body(response).await.map_err(QueryError::from)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Ask rejected");
            return Err(QueryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let result: AnswerResult = serde_json::from_str(&body)
            .map_err(|e| QueryError::MalformedResponse(e.to_string()))?;
        debug!(sources = result.sources.len(), "Answer received");
        Ok(result)
    }
}

impl RagApi for BackendClient {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Token, AuthError>> + Send {
        BackendClient::login(self, credentials)
    }

    fn ask(&self, query: &Query, token: &Token) -> impl Future<Output = Result<AnswerResult, QueryError>> + Send {
        BackendClient::ask(self, query, token)
    }
}

async fn read_body(response: Response) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
