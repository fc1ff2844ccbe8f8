#![doc = include_str!("../README.md")]

pub mod directory;
pub mod document;
mod error;
mod login;
pub mod pipeline;
pub mod render;
mod sink;

pub use crate::directory::{DEFAULT_ENDPOINT, Directory, DirectoryClient};
pub use crate::document::{Document, build_profile_document, profile_url};
pub use crate::error::*;
pub use crate::login::Login;
pub use crate::pipeline::{Concurrency, Coordinator, ItemOutcome, Pipeline, RunSummary};
pub use crate::render::{PdfRenderer, RenderError, Renderer};
pub use crate::sink::{ARTIFACT_EXTENSION, Sink};
