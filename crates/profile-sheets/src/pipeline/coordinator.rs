//! Fan-out of one unit of work per login.
//!
//! [`Coordinator::fan_out`] spawns a tokio task for every login. Each task
//! builds the profile document and hands it to the [`Sink`]; failures are
//! logged inside the task and never touch sibling tasks. The coordinator then
//! awaits every task handle, so it returns only once each unit has finished,
//! and records exactly one [`ItemOutcome`] per login.

use super::summary::{ItemOutcome, RunSummary};
use crate::{Error, Login, Result, document::build_profile_document, render::Renderer, sink::Sink};
use core::num::NonZeroUsize;
use std::{path::PathBuf, sync::Arc};
use tokio::{sync::Semaphore, task::JoinHandle};
use tracing::Instrument;

/// How many units may run at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Concurrency {
    /// Every unit starts immediately.
    #[default]
    Unbounded,
    /// At most `n` units render or write at once; the rest wait for a permit.
    Limited(NonZeroUsize),
}

impl From<Option<NonZeroUsize>> for Concurrency {
    fn from(limit: Option<NonZeroUsize>) -> Self {
        limit.map_or(Self::Unbounded, Self::Limited)
    }
}

pub struct Coordinator<R> {
    sink: Arc<Sink<R>>,
    concurrency: Concurrency,
}

impl<R> Clone for Coordinator<R> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            concurrency: self.concurrency,
        }
    }
}

impl<R> Coordinator<R>
where
    R: Renderer + 'static,
{
    pub fn new(sink: Sink<R>, concurrency: Concurrency) -> Self {
        Self {
            sink: Arc::new(sink),
            concurrency,
        }
    }

    pub fn sink(&self) -> &Sink<R> {
        &self.sink
    }

    /// Generates one profile sheet per login and waits for all of them.
    ///
    /// Must be called from within a tokio runtime. The returned summary holds
    /// one outcome per input login, in input order; completion order among the
    /// units themselves is unspecified.
    pub async fn fan_out(&self, logins: Vec<Login>) -> RunSummary {
        let limiter = match self.concurrency {
            Concurrency::Unbounded => None,
            Concurrency::Limited(n) => Some(Arc::new(Semaphore::new(n.get()))),
        };

        tracing::info!(units = logins.len(), concurrency = ?self.concurrency, "Spawning units");

        let handles: Vec<_> = logins
            .into_iter()
            .map(|login| {
                let sink = Arc::clone(&self.sink);
                let limiter = limiter.clone();
                let span = tracing::info_span!("profile_sheet", login = %login);
                let task_login = login.clone();
                let handle =
                    tokio::spawn(run_unit(sink, limiter, task_login).instrument(span));
                (login, handle)
            })
            .collect();

        let outcomes = futures::future::join_all(
            handles
                .into_iter()
                .map(|(login, handle)| await_unit(login, handle)),
        )
        .await;

        let summary = RunSummary::from_outcomes(outcomes);
        tracing::info!(
            completed = summary.completed(),
            written = summary.written_count(),
            failed = summary.failed_count(),
            "All units finished"
        );
        summary
    }
}

/// Waits for one unit. A task that panicked or was cancelled still yields an
/// outcome for its login.
pub(super) async fn await_unit(
    login: Login,
    handle: JoinHandle<Result<PathBuf>>,
) -> ItemOutcome {
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(login = %login, error = %e, "Profile sheet task aborted");
            Err(Error::TaskAborted {
                login: login.clone(),
                reason: e.to_string(),
            })
        }
    };
    ItemOutcome { login, result }
}

async fn run_unit<R>(
    sink: Arc<Sink<R>>,
    limiter: Option<Arc<Semaphore>>,
    login: Login,
) -> Result<PathBuf>
where
    R: Renderer + 'static,
{
    let result = generate(&sink, limiter, &login).await;
    match &result {
        Ok(path) => tracing::info!(path = %path.display(), "Profile sheet written"),
        // Render, write and path failures are reported the same way.
        Err(e) => tracing::error!(
            error = e as &(dyn std::error::Error + 'static),
            "Profile sheet failed"
        ),
    }
    result
}

async fn generate<R>(
    sink: &Sink<R>,
    limiter: Option<Arc<Semaphore>>,
    login: &Login,
) -> Result<PathBuf>
where
    R: Renderer + 'static,
{
    let _permit = match limiter {
        Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(|e| {
            Error::TaskAborted {
                login: login.clone(),
                reason: e.to_string(),
            }
        })?),
        None => None,
    };

    let document = build_profile_document(login);
    sink.emit(login, document).await
}
