mod common;

use common::{search_response, spawn_directory};
use profile_sheets::{Directory, DirectoryClient, Error, Login};

#[tokio::test]
async fn fetch_sends_bearer_token_and_json_query() {
    let server = spawn_directory(200, &search_response(&["octocat", "alice"])).await;
    let client = DirectoryClient::new(&server.url, "ghp_test").unwrap();

    let logins = client.fetch_logins(2).await.unwrap();
    assert_eq!(logins, vec![Login::new("octocat"), Login::new("alice")]);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer ghp_test"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(query.contains(r#"query: "type:user""#));
    assert!(query.contains("type: USER"));
    assert!(query.contains("first: 2"));
}

#[tokio::test]
async fn non_success_status_carries_the_code() {
    let server = spawn_directory(401, r#"{ "message": "Bad credentials" }"#).await;
    let client = DirectoryClient::new(&server.url, "ghp_test").unwrap();

    match client.fetch_logins(5).await {
        Err(Error::Status { code }) => assert_eq!(code, 401),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let server = spawn_directory(200, r#"{ "data": { "viewer": { "login": "x" } } }"#).await;
    let client = DirectoryClient::new(&server.url, "ghp_test").unwrap();

    assert!(matches!(
        client.fetch_logins(5).await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn graphql_error_payload_is_surfaced() {
    let server = spawn_directory(
        200,
        r#"{ "data": null, "errors": [ { "message": "Something went wrong" } ] }"#,
    )
    .await;
    let client = DirectoryClient::new(&server.url, "ghp_test").unwrap();

    match client.fetch_logins(5).await {
        Err(Error::Graphql { message }) => assert_eq!(message, "Something went wrong"),
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_count_is_rejected_without_a_request() {
    let server = spawn_directory(200, &search_response(&[])).await;
    let client = DirectoryClient::new(&server.url, "ghp_test").unwrap();

    assert!(matches!(
        client.fetch_logins(0).await,
        Err(Error::InvalidRequest { .. })
    ));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DirectoryClient::new(&format!("http://{addr}/graphql"), "ghp_test").unwrap();

    assert!(matches!(
        client.fetch_logins(1).await,
        Err(Error::Transport(_))
    ));
}
