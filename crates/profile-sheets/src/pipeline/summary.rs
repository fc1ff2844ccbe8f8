use crate::{Error, Login};
use std::path::PathBuf;

/// Result of a single unit of work.
#[derive(Debug)]
pub struct ItemOutcome {
    pub login: Login,
    pub result: Result<PathBuf, Error>,
}

/// Per-login outcomes of a fan-out, in input order.
///
/// Every login handed to the coordinator appears exactly once, either in
/// [`written`](Self::written) or in [`failed`](Self::failed).
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    pub(crate) fn from_outcomes(outcomes: Vec<ItemOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of units that completed, successfully or not.
    pub fn completed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    pub fn written(&self) -> impl Iterator<Item = (&Login, &PathBuf)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|path| (&o.login, path)))
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Login, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (&o.login, err)))
    }

    pub fn written_count(&self) -> usize {
        self.written().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }
}
