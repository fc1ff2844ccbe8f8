//! GraphQL request and response shapes for the user search.
//!
//! Only the path `data.search.edges[].node.login` is read from a response; any
//! other shape is a decode failure. A body that carries an `errors` array and
//! no `data` is surfaced as [`Error::Graphql`] so the server's messages reach
//! the log.

use crate::{Error, Login, Result};
use serde::{Deserialize, Serialize};

/// Search predicate sent with every directory query.
pub const SEARCH_PREDICATE: &str = "type:user";

/// Request body: a JSON object with a single `query` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
}

impl GraphqlRequest {
    /// Builds the user search query asking for the first `count` accounts.
    pub fn search_users(count: usize) -> Self {
        let query = format!(
            r#"{{
  search(query: "{SEARCH_PREDICATE}", type: USER, first: {count}) {{
    edges {{
      node {{
        ... on User {{
          login
        }}
      }}
    }}
  }}
}}"#
        );
        Self { query }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<SearchData>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: Search,
}

#[derive(Debug, Deserialize)]
struct Search {
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    node: Node,
}

#[derive(Debug, Deserialize)]
struct Node {
    login: Login,
}

/// Decodes a search response body into logins, preserving response order.
///
/// # Errors
///
/// - [`Error::Graphql`] when the body holds only GraphQL errors.
/// - [`Error::Decode`] for any other deviation from the expected shape.
pub fn decode_logins(body: &[u8]) -> Result<Vec<Login>> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    match envelope.data {
        Some(data) => Ok(data
            .search
            .edges
            .into_iter()
            .map(|edge| edge.node.login)
            .collect()),
        None if !envelope.errors.is_empty() => Err(Error::Graphql {
            message: envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
        }),
        None => Err(Error::Decode(serde::de::Error::missing_field("data"))),
    }
}
