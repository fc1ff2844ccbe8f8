//! Remote directory of account logins.
//!
//! ## Structure
//!
//! - [`client`] - [`DirectoryClient`], the single-shot GraphQL client.
//! - [`query`] - request payload and response decoding.
//!
//! The pipeline only depends on the [`Directory`] trait, so any source of
//! logins can drive a run.

pub mod client;
pub mod query;

#[cfg(test)]
mod tests;

pub use client::{DEFAULT_ENDPOINT, DirectoryClient};

use crate::{Login, Result};
use core::future::Future;

/// A source of account logins.
pub trait Directory: Send + Sync {
    /// Returns up to `count` logins in directory order.
    ///
    /// Any error is terminal for the run: no partial result is returned.
    fn fetch_logins(&self, count: usize) -> impl Future<Output = Result<Vec<Login>>> + Send;
}
