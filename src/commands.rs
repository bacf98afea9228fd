//! Command-line handlers
//!
//! Each handler runs against any [`RagApi`] so it can be driven by the real
//! backend or a stub.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::backend::{AuthError, Credentials, RagApi, Retriever, SourceRecord, Token};
use crate::session::Session;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid credentials ({0})")]
    Login(#[from] AuthError),

    #[error("Nothing to ask: a question and at least one --source are required")]
    NothingToAsk,
}

/// Log in and hand back the token
pub async fn login<A: RagApi>(api: &A, credentials: &Credentials) -> Result<Token, CommandError> {
    Ok(api.login(credentials).await?)
}

/// Log in, ask once and render the answer the way the window shows it.
///
/// A failed ask is not an error here: its "Error: ..." answer is the output.
pub async fn ask<A: RagApi>(
    api: &A,
    credentials: &Credentials,
    question: &str,
    sources: &[Retriever],
) -> Result<String, CommandError> {
    let selected: BTreeSet<Retriever> = sources.iter().copied().collect();
    if question.is_empty() || selected.is_empty() {
        return Err(CommandError::NothingToAsk);
    }

    let token = api.login(credentials).await?;
    let mut session = Session::new();
    session.finish_login(Ok(token));

    if !session.ask(api, question, &selected).await {
        return Err(CommandError::NothingToAsk);
    }
    Ok(render_answer(session.answer(), session.sources()))
}

/// Plain-text rendering of an answer and its sources
pub fn render_answer(answer: &str, sources: &[SourceRecord]) -> String {
    let mut out = format!("Answer: {}\n", answer);
    if sources.is_empty() {
        return out;
    }

    out.push_str("\nSources:\n");
    for source in sources {
        out.push_str(&format!("  - {}\n", source.heading()));
        if let Some(snippet) = source.snippet() {
            out.push_str(&format!("    {}\n", snippet));
        }
        if let Some(url) = source.url() {
            out.push_str(&format!("    {}\n", url));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_answer_only() {
        assert_eq!(render_answer("X is Y", &[]), "Answer: X is Y\n");
    }

    #[test]
    fn test_render_skips_missing_fields() {
        let sources = vec![
            SourceRecord {
                kind: "doc".to_string(),
                title: Some("T".to_string()),
                snippet: Some("S".to_string()),
                ..Default::default()
            },
            SourceRecord {
                kind: "chroma".to_string(),
                title: Some(String::new()),
                url: Some("https://example.com/guide".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            render_answer("X is Y", &sources),
            "Answer: X is Y\n\nSources:\n  - doc: T\n    S\n  - chroma\n    https://example.com/guide\n"
        );
    }

    #[test]
    fn test_login_error_message() {
        let err = CommandError::from(AuthError::Rejected {
            status: 401,
            body: "bad".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid credentials (Login failed (401): bad)");
    }
}
