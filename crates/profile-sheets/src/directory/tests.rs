use super::query::{GraphqlRequest, SEARCH_PREDICATE, decode_logins};
use super::{DEFAULT_ENDPOINT, DirectoryClient};
use crate::{Error, Login};

#[test]
fn search_query_embeds_predicate_type_and_count() {
    let request = GraphqlRequest::search_users(200);

    assert!(request.query.contains(&format!("query: \"{SEARCH_PREDICATE}\"")));
    assert!(request.query.contains("type: USER"));
    assert!(request.query.contains("first: 200"));
    assert!(request.query.contains("... on User"));
    assert!(request.query.contains("login"));
}

#[test]
fn request_body_is_a_single_query_field() {
    let body = serde_json::to_value(GraphqlRequest::search_users(3)).unwrap();
    let object = body.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert!(object["query"].as_str().unwrap().contains("first: 3"));
}

#[test]
fn decodes_logins_in_response_order() {
    let body = br#"{
        "data": {
            "search": {
                "edges": [
                    { "node": { "login": "octocat" } },
                    { "node": { "login": "alice" } },
                    { "node": { "login": "bob" } }
                ]
            }
        }
    }"#;

    let logins = decode_logins(body).unwrap();
    assert_eq!(
        logins,
        vec![Login::new("octocat"), Login::new("alice"), Login::new("bob")]
    );
}

#[test]
fn decodes_empty_edge_list() {
    let body = br#"{ "data": { "search": { "edges": [] } } }"#;
    assert!(decode_logins(body).unwrap().is_empty());
}

#[test]
fn node_without_login_is_a_decode_error() {
    let body = br#"{ "data": { "search": { "edges": [ { "node": {} } ] } } }"#;
    assert!(matches!(decode_logins(body), Err(Error::Decode(_))));
}

#[test]
fn non_json_body_is_a_decode_error() {
    assert!(matches!(
        decode_logins(b"<html>rate limited</html>"),
        Err(Error::Decode(_))
    ));
}

#[test]
fn missing_data_without_errors_is_a_decode_error() {
    assert!(matches!(decode_logins(b"{}"), Err(Error::Decode(_))));
    assert!(matches!(
        decode_logins(br#"{ "data": null }"#),
        Err(Error::Decode(_))
    ));
}

#[test]
fn graphql_errors_are_reported_with_messages() {
    let body = br#"{
        "data": null,
        "errors": [
            { "message": "Bad credentials" },
            { "message": "Try again" }
        ]
    }"#;

    match decode_logins(body) {
        Err(Error::Graphql { message }) => assert_eq!(message, "Bad credentials; Try again"),
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[test]
fn client_rejects_blank_token() {
    assert!(matches!(
        DirectoryClient::new(DEFAULT_ENDPOINT, "   "),
        Err(Error::InvalidRequest { .. })
    ));
}

#[test]
fn client_rejects_malformed_endpoint() {
    assert!(matches!(
        DirectoryClient::new("not a url", "token"),
        Err(Error::InvalidRequest { .. })
    ));
}

#[test]
fn client_debug_output_redacts_token() {
    let client = DirectoryClient::new(DEFAULT_ENDPOINT, "ghp_secret").unwrap();
    let debug = format!("{client:?}");

    assert!(!debug.contains("ghp_secret"));
    assert!(debug.contains("api.github.com"));
}
