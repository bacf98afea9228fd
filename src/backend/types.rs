//! Shared types for backend communication

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Username/password pair submitted to `/token`
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer token issued by `/token`. Empty means unauthenticated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Token(<empty>)")
        } else {
            f.write_str("Token(<redacted>)")
        }
    }
}

/// Success payload of `/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Retrieval backends the service can consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retriever {
    Mock,
    Chroma,
    Faiss,
}

impl Retriever {
    /// Every retriever, in the order the ask form lists them
    pub const ALL: [Retriever; 3] = [Retriever::Mock, Retriever::Chroma, Retriever::Faiss];

    pub fn as_str(self) -> &'static str {
        match self {
            Retriever::Mock => "mock",
            Retriever::Chroma => "chroma",
            Retriever::Faiss => "faiss",
        }
    }
}

impl fmt::Display for Retriever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Retriever {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(Retriever::Mock),
            "chroma" => Ok(Retriever::Chroma),
            "faiss" => Ok(Retriever::Faiss),
            other => Err(format!(
                "unknown retriever '{}' (expected one of: mock, chroma, faiss)",
                other
            )),
        }
    }
}

/// Body of `/ask`
///
/// Only constructed through [`Query::new`], which refuses an empty question or
/// an empty retriever selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    question: String,
    sources: BTreeSet<Retriever>,
}

impl Query {
    pub fn new(question: impl Into<String>, sources: BTreeSet<Retriever>) -> Option<Self> {
        let question = question.into();
        if question.is_empty() || sources.is_empty() {
            return None;
        }
        Some(Self { question, sources })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn sources(&self) -> &BTreeSet<Retriever> {
        &self.sources
    }
}

/// Success payload of `/ask`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<SourceRecord>,
}

/// One piece of evidence backing an answer, as reported by the service.
///
/// Everything except `type` may be missing. Scalar values of any JSON type
/// are kept in their string form, anything else is dropped. The accessors
/// below treat an empty string the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "type", deserialize_with = "scalar_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

impl SourceRecord {
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn snippet(&self) -> Option<&str> {
        non_empty(self.snippet.as_deref())
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_deref())
    }

    /// `type` followed by `": title"` when a title is present
    pub fn heading(&self) -> String {
        match self.title() {
            Some(title) => format!("{}: {}", self.kind, title),
            None => self.kind.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
        .ok_or_else(|| de::Error::custom("source type must be a string"))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SourceRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SourceRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retriever() {
        assert_eq!("mock".parse::<Retriever>(), Ok(Retriever::Mock));
        assert_eq!(" Chroma ".parse::<Retriever>(), Ok(Retriever::Chroma));
        assert_eq!("FAISS".parse::<Retriever>(), Ok(Retriever::Faiss));
        assert!("pinecone".parse::<Retriever>().is_err());
    }

    #[test]
    fn test_retriever_wire_names() {
        let json = serde_json::to_string(&Retriever::ALL).unwrap();
        assert_eq!(json, r#"["mock","chroma","faiss"]"#);
    }

    #[test]
    fn test_query_rejects_empty_selection() {
        assert!(Query::new("What is X?", BTreeSet::new()).is_none());
        assert!(Query::new("", BTreeSet::from([Retriever::Mock])).is_none());
        assert!(Query::new("   ", BTreeSet::from([Retriever::Mock])).is_some());
        assert!(Query::new("What is X?", BTreeSet::from([Retriever::Mock])).is_some());
    }

    #[test]
    fn test_query_survives_server_echo() {
        let query = Query::new(
            "What is vector search?",
            BTreeSet::from([Retriever::Faiss, Retriever::Mock]),
        )
        .unwrap();

        let echoed: serde_json::Value = serde_json::to_value(&query).unwrap();
        assert_eq!(echoed["question"], "What is vector search?");
        assert_eq!(echoed["sources"].as_array().unwrap().len(), 2);

        let back: Query = serde_json::from_value(echoed).unwrap();
        assert_eq!(back.question(), query.question());
        assert_eq!(back.sources(), query.sources());
    }

    #[test]
    fn test_source_record_tolerates_missing_fields() {
        let record: SourceRecord = serde_json::from_str(r#"{"type":"faiss","extra":42}"#).unwrap();
        assert_eq!(record.kind, "faiss");
        assert_eq!(record.title(), None);
        assert_eq!(record.snippet(), None);
        assert_eq!(record.url(), None);
        assert_eq!(record.heading(), "faiss");
    }

    #[test]
    fn test_source_record_hides_empty_strings() {
        let record: SourceRecord = serde_json::from_str(
            r#"{"type":"chroma","title":"Guide","snippet":"","url":"","id":null}"#,
        )
        .unwrap();
        assert_eq!(record.heading(), "chroma: Guide");
        assert_eq!(record.snippet(), None);
        assert_eq!(record.url(), None);
    }

    #[test]
    fn test_source_record_stringifies_scalars() {
        let record: SourceRecord = serde_json::from_str(
            r#"{"type":"chroma","id":17,"title":7,"snippet":true,"url":{"href":"x"}}"#,
        )
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("17"));
        assert_eq!(record.heading(), "chroma: 7");
        assert_eq!(record.snippet(), Some("true"));
        assert_eq!(record.url(), None);
    }

    #[test]
    fn test_null_sources_is_empty() {
        let result: AnswerResult =
            serde_json::from_str(r#"{"answer":"X is Y","sources":null}"#).unwrap();
        assert_eq!(result.answer, "X is Y");
        assert!(result.sources.is_empty());

        let result: AnswerResult = serde_json::from_str(r#"{"answer":"X is Y"}"#).unwrap();
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("demo", "test123");
        let token = Token::new("abc123");
        assert!(!format!("{:?}", creds).contains("test123"));
        assert!(!format!("{:?}", token).contains("abc123"));
    }
}
