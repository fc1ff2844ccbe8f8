//! Render-and-persist step of a unit of work.
//!
//! A [`Sink`] owns the renderer and the output directory. For every login it
//! renders the document on the blocking pool and writes the artifact to
//! `<output_dir>/<login>.pdf`. A render failure means nothing is written.

use crate::{Error, Login, Result, document::Document, render::Renderer};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Extension appended to every artifact.
pub const ARTIFACT_EXTENSION: &str = "pdf";

pub struct Sink<R> {
    renderer: Arc<R>,
    output_dir: PathBuf,
}

impl<R> Sink<R>
where
    R: Renderer + 'static,
{
    pub fn new(renderer: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: Arc::new(renderer),
            output_dir: output_dir.into(),
        }
    }

    /// Creates the output directory if it does not exist yet.
    pub async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| Error::OutputDir {
                path: self.output_dir.clone(),
                source,
            })
    }

    /// Returns the artifact path for `login`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if the login is empty or is anything other than
    /// a single plain path component.
    pub fn artifact_path(&self, login: &Login) -> Result<PathBuf> {
        let name = login.as_str();
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_normal || name.contains(['/', '\\']) {
            return Err(Error::InvalidPath {
                login: login.clone(),
            });
        }

        Ok(self
            .output_dir
            .join(format!("{name}.{ARTIFACT_EXTENSION}")))
    }

    /// Renders `document` and writes it to the artifact path for `login`.
    ///
    /// Returns the written path.
    pub async fn emit(&self, login: &Login, document: Document) -> Result<PathBuf> {
        let path = self.artifact_path(login)?;

        let renderer = Arc::clone(&self.renderer);
        let bytes = tokio::task::spawn_blocking(move || renderer.render(&document))
            .await
            .map_err(|e| Error::TaskAborted {
                login: login.clone(),
                reason: e.to_string(),
            })?
            .map_err(|source| Error::Render {
                login: login.clone(),
                source,
            })?;

        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Artifact written");
        Ok(path)
    }
}
