use serde_json::json;
use vectorworx::backend::{AuthError, BackendClient, Credentials, Retriever};
use vectorworx::commands::{self, CommandError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend_with_login(mock_server: &MockServer) -> BackendClient {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "abc123", "token_type": "bearer" })),
        )
        .mount(mock_server)
        .await;
    BackendClient::new(&mock_server.uri())
}

#[tokio::test]
async fn test_ask_command_prints_answer() {
    let mock_server = MockServer::start().await;
    let backend = backend_with_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "X is Y",
            "sources": [{ "type": "doc", "title": "T", "snippet": "S" }]
        })))
        .mount(&mock_server)
        .await;

    let output = commands::ask(
        &backend,
        &Credentials::new("demo", "test123"),
        "What is X?",
        &[Retriever::Mock],
    )
    .await
    .unwrap();

    assert_eq!(output, "Answer: X is Y\n\nSources:\n  - doc: T\n    S\n");
}

#[tokio::test]
async fn test_ask_command_prints_error_answer() {
    let mock_server = MockServer::start().await;
    let backend = backend_with_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let output = commands::ask(
        &backend,
        &Credentials::new("demo", "test123"),
        "What is X?",
        &[Retriever::Mock],
    )
    .await
    .unwrap();

    assert_eq!(output, "Answer: Error: Ask failed (500): boom\n");
}

#[tokio::test]
async fn test_ask_command_without_sources_sends_nothing() {
    let mock_server = MockServer::start().await;
    let backend = BackendClient::new(&mock_server.uri());

    let result = commands::ask(&backend, &Credentials::new("demo", "test123"), "What is X?", &[]).await;
    assert!(matches!(result, Err(CommandError::NothingToAsk)));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_ask_command_stops_on_failed_login() {
    let mock_server = MockServer::start().await;
    let backend = BackendClient::new(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = commands::ask(
        &backend,
        &Credentials::new("demo", "wrong"),
        "What is X?",
        &[Retriever::Mock],
    )
    .await;

    match result {
        Err(CommandError::Login(AuthError::Rejected { status, .. })) => assert_eq!(status, 401),
        other => panic!("Expected login rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_command_returns_token() {
    let mock_server = MockServer::start().await;
    let backend = backend_with_login(&mock_server).await;

    let token = commands::login(&backend, &Credentials::new("demo", "test123"))
        .await
        .unwrap();
    assert_eq!(token.as_str(), "abc123");
}
