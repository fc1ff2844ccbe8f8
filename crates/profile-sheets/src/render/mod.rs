//! Rendering of [`Document`]s into bytes.
//!
//! The pipeline treats the renderer as opaque: anything implementing
//! [`Renderer`] can be plugged into a [`Sink`](crate::Sink). [`PdfRenderer`]
//! is the production implementation.

mod layout;
mod pdf;


pub use layout::{PageLayout, line_height_mm, wrap_text};
pub use pdf::PdfRenderer;

use crate::document::Document;

/// Failure reported by a [`Renderer`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct RenderError {
    reason: String,
}

impl RenderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<printpdf::Error> for RenderError {
    fn from(err: printpdf::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Turns a document description into an artifact.
///
/// Implementations are called from the blocking thread pool and may take as
/// long as they need; they must not share mutable state between calls.
pub trait Renderer: Send + Sync {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;
}
