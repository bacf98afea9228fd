//! Session state shared by the desktop UI and the CLI
//!
//! Owns the token and the last rendered answer. The backend is handed the
//! token on every call and never stores it.

use std::collections::BTreeSet;

use tracing::{debug, error, info};

use crate::backend::{AnswerResult, AuthError, Credentials, Query, QueryError, RagApi, Retriever, SourceRecord, Token};

/// Shown for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Default)]
pub struct Session {
    token: Token,
    login_error: Option<String>,
    logging_in: bool,
    asking: bool,
    /// Bumped on logout so answers requested before it can be told apart
    generation: u64,
    answer: String,
    sources: Vec<SourceRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn is_logging_in(&self) -> bool {
        self.logging_in
    }

    pub fn is_asking(&self) -> bool {
        self.asking
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    /// Mark a login as in flight. Returns false if one already is.
    pub fn begin_login(&mut self) -> bool {
        if self.logging_in {
            return false;
        }
        self.logging_in = true;
        self.login_error = None;
        true
    }

    pub fn finish_login(&mut self, result: Result<Token, AuthError>) {
        match result {
            Ok(token) => {
                info!("Logged in");
                self.token = token;
            }
            Err(e) => {
                error!("Login error: {}", e);
                self.login_error = Some(INVALID_CREDENTIALS.to_string());
            }
        }
        self.logging_in = false;
    }

    /// Build the query to submit, or `None` when the question is empty, no
    /// retriever is selected, or an ask is already in flight.
    pub fn begin_ask(&mut self, question: &str, selected: &BTreeSet<Retriever>) -> Option<Query> {
        if self.asking {
            return None;
        }
        let query = Query::new(question, selected.clone())?;
        self.asking = true;
        Some(query)
    }

    pub fn finish_ask(&mut self, result: Result<AnswerResult, QueryError>) {
        match result {
            Ok(result) => {
                self.answer = result.answer;
                self.sources = result.sources;
            }
            Err(e) => {
                error!("Ask error: {}", e);
                self.answer = format!("Error: {}", e);
                self.sources.clear();
            }
        }
        self.asking = false;
    }

    /// Apply an answer requested during `generation`, dropping it if the
    /// session has logged out since.
    pub fn finish_ask_for(&mut self, generation: u64, result: Result<AnswerResult, QueryError>) {
        if generation != self.generation {
            debug!("Dropping answer requested before logout");
            return;
        }
        self.finish_ask(result);
    }

    pub fn logout(&mut self) {
        info!("Logged out");
        self.token = Token::default();
        self.generation += 1;
        self.asking = false;
        self.answer.clear();
        self.sources.clear();
    }

    /// Log in through `api`. Returns whether the session is now authenticated.
    pub async fn login<A: RagApi>(&mut self, api: &A, credentials: &Credentials) -> bool {
        if !self.begin_login() {
            return false;
        }
        let result = api.login(credentials).await;
        self.finish_login(result);
        self.is_authenticated()
    }

    /// Ask through `api`. Returns false without calling `api` when the
    /// question or selection is refused.
    pub async fn ask<A: RagApi>(&mut self, api: &A, question: &str, selected: &BTreeSet<Retriever>) -> bool {
        let Some(query) = self.begin_ask(question, selected) else {
            return false;
        };
        let result = api.ask(&query, &self.token).await;
        self.finish_ask(result);
        true
    }
}
