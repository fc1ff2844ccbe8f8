//! Local stand-in for the GraphQL endpoint.

#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::post,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockDirectory {
    pub url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockDirectory {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(CapturedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    (state.status, state.body.to_string())
}

/// Serves `body` with `status` for every `POST /graphql`.
pub async fn spawn_directory(status: u16, body: &str) -> MockDirectory {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body: Arc::from(body),
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route("/graphql", post(graphql))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockDirectory {
        url: format!("http://{addr}/graphql"),
        requests,
    }
}

/// Builds a search response body listing `logins`.
pub fn search_response(logins: &[&str]) -> String {
    let edges: Vec<String> = logins
        .iter()
        .map(|l| format!(r#"{{ "node": {{ "login": "{l}" }} }}"#))
        .collect();
    format!(
        r#"{{ "data": {{ "search": {{ "edges": [{}] }} }} }}"#,
        edges.join(", ")
    )
}
