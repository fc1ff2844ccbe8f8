//! Fetch-then-generate pipeline.
//!
//! ## Structure
//!
//! - [`coordinator`] - one task per login with a join over all of them.
//! - [`summary`] - per-login outcomes returned by a run.
//!
//! [`Pipeline::run`] is fail-fast up to the fan-out: a directory error or an
//! unusable output directory aborts the run before any unit is spawned. Once
//! the fan-out starts, failures are per login and only show up in the
//! [`RunSummary`].

pub mod coordinator;
pub mod summary;


pub use coordinator::{Concurrency, Coordinator};
pub use summary::{ItemOutcome, RunSummary};

use crate::{Login, Result, directory::Directory, render::Renderer};
use std::collections::HashSet;

pub struct Pipeline<D, R> {
    directory: D,
    coordinator: Coordinator<R>,
}

impl<D, R> Pipeline<D, R>
where
    D: Directory,
    R: Renderer + 'static,
{
    pub const fn new(directory: D, coordinator: Coordinator<R>) -> Self {
        Self {
            directory,
            coordinator,
        }
    }

    /// Fetches up to `count` logins and generates a profile sheet for each.
    ///
    /// # Errors
    ///
    /// Returns the directory error, or [`Error::OutputDir`](crate::Error::OutputDir)
    /// if the output directory cannot be created. Per-login failures are not
    /// errors; they are reported in the returned [`RunSummary`].
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, count: usize) -> Result<RunSummary> {
        let logins = self.directory.fetch_logins(count).await?;
        let logins = dedup_logins(logins);

        if logins.is_empty() {
            tracing::warn!("Directory returned no logins; nothing to generate");
            return Ok(RunSummary::default());
        }

        self.coordinator.sink().prepare().await?;
        Ok(self.coordinator.fan_out(logins).await)
    }
}

/// Drops repeated logins, keeping the first occurrence and the original order.
pub fn dedup_logins(logins: Vec<Login>) -> Vec<Login> {
    let mut seen = HashSet::with_capacity(logins.len());
    let before = logins.len();
    let unique: Vec<_> = logins
        .into_iter()
        .filter(|login| seen.insert(login.clone()))
        .collect();

    if unique.len() != before {
        tracing::warn!(
            duplicates = before - unique.len(),
            "Directory returned duplicate logins; keeping first occurrences"
        );
    }
    unique
}
