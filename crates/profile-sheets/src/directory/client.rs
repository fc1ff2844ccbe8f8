use super::{
    Directory,
    query::{GraphqlRequest, decode_logins},
};
use crate::{Error, Login, Result};
use reqwest::header::{CONTENT_TYPE, HeaderValue};

/// Public GitHub GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

const CLIENT_USER_AGENT: &str = concat!("profile-sheets/", env!("CARGO_PKG_VERSION"));

/// Single-shot GraphQL client for the user directory.
///
/// Each call to [`Directory::fetch_logins`] performs exactly one `POST`. There
/// is no retry and no pagination: a run works from whatever snapshot the one
/// response carries.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    token: String,
}

impl DirectoryClient {
    /// Creates a client for `endpoint` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] if the token is blank or the endpoint is
    ///   not a valid URL.
    /// - [`Error::Transport`] if the HTTP client cannot be constructed.
    pub fn new(endpoint: &str, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::InvalidRequest {
                reason: "token must not be empty".to_string(),
            });
        }

        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| Error::InvalidRequest {
            reason: format!("invalid endpoint `{endpoint}`: {e}"),
        })?;

        let http = reqwest::Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

impl core::fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Directory for DirectoryClient {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_logins(&self, count: usize) -> Result<Vec<Login>> {
        if count == 0 {
            return Err(Error::InvalidRequest {
                reason: "Count must be greater than 0".to_string(),
            });
        }

        let body = GraphqlRequest::search_users(count);

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&body)
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "Directory request failed"
                );
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Directory response received");

        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let logins = decode_logins(&bytes)?;

        tracing::info!(requested = count, received = logins.len(), "Fetched logins");
        Ok(logins)
    }
}
