//! Error types for the profile sheet pipeline.
//!
//! A single [`Error`] enum covers both classes of failure the pipeline can
//! produce:
//!
//! - **Run errors** abort the whole run before any sheet is generated:
//!   `InvalidRequest`, `Transport`, `Status`, `Decode`, `Graphql`, `OutputDir`.
//! - **Item errors** are confined to a single login and are only ever logged
//!   and collected into the run summary: `InvalidPath`, `Render`, `Write`,
//!   `TaskAborted`.

use crate::login::Login;
use crate::render::RenderError;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the profile sheet pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller supplied an unusable argument (empty token, zero count).
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The directory request never produced an HTTP response.
    #[error("Directory request failed")]
    Transport(#[from] reqwest::Error),

    /// The directory answered with a non-success status code.
    #[error("Unexpected status code: {code}")]
    Status { code: u16 },

    /// The directory body did not match `data.search.edges[].node.login`.
    #[error("Cannot decode directory response")]
    Decode(#[from] serde_json::Error),

    /// The directory answered with GraphQL errors instead of data.
    #[error("GraphQL error: {message}")]
    Graphql { message: String },

    /// The output directory could not be created.
    #[error("Cannot prepare output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The login cannot be used as a file name.
    #[error("Login `{login}` is not a valid file name")]
    InvalidPath { login: Login },

    /// The renderer rejected the document.
    #[error("Cannot render profile sheet for `{login}`")]
    Render {
        login: Login,
        #[source]
        source: RenderError,
    },

    /// The rendered artifact could not be written.
    #[error("Cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The unit of work panicked or was torn down before finishing.
    #[error("Task for `{login}` aborted: {reason}")]
    TaskAborted { login: Login, reason: String },
}
