//! Strategies for saving fetched artifact bytes on the host.
//!
//! Two strategies exist. [`DirectWriter`] asks the user for a save target and
//! writes there; it is only available when the host can prompt.
//! [`TransientWriter`] stages the bytes in a temporary file and hands that to
//! a [`SaveTrigger`]; it is always available. [`Strategies::detect`] picks
//! them once at startup.

mod direct;
mod transient;

use std::{
  io,
  path::{Path, PathBuf},
  sync::Arc,
};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};

pub use direct::DirectWriter;
#[cfg(test)]
pub(crate) use direct::write_or_discard;
pub use transient::TransientWriter;

use crate::error::WriteError;

/// Result of a strategy run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
  /// The save happened or was initiated. `location` is where it landed, if
  /// the strategy can tell.
  Saved { location: Option<PathBuf> },
  /// The user dismissed the save prompt.
  Cancelled,
}

#[async_trait]
pub trait ArtifactWriter: Send + Sync {
  /// Short stable name recorded on the download record.
  fn name(&self) -> &'static str;

  async fn write(&self, bytes: Bytes, file_name: &str) -> Result<WriteOutcome, WriteError>;
}

/// A user-mediated "save as" capability.
#[async_trait]
pub trait SavePrompt: Send + Sync {
  /// Ask where to save `suggested_name`. `None` means the user cancelled.
  async fn choose(&self, suggested_name: &str) -> io::Result<Option<PathBuf>>;
}

/// Starts the host's own save of a staged file.
///
/// Called from a blocking thread. The staged file is removed shortly after
/// this returns, so implementations must copy or hand it off before
/// returning.
pub trait SaveTrigger: Send + Sync {
  fn trigger(&self, staged: &Path, file_name: &str) -> io::Result<PathBuf>;
}

// ─── Downloads folder ────────────────────────────────────────────────────────

/// A [`SaveTrigger`] that copies into a downloads directory, picking
/// `name (1).ext`, `name (2).ext`, ... when the name is taken.
#[derive(Debug, Clone)]
pub struct DownloadsFolder {
  dir: PathBuf,
}

impl DownloadsFolder {
  pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

  pub fn dir(&self) -> &Path { &self.dir }

  fn free_path(&self, file_name: &str) -> PathBuf {
    let first = self.dir.join(file_name);
    if !first.exists() {
      return first;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
      Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
      _ => (file_name, None),
    };
    (1..)
      .map(|n| match ext {
        Some(ext) => self.dir.join(format!("{stem} ({n}).{ext}")),
        None => self.dir.join(format!("{stem} ({n})")),
      })
      .find(|p| !p.exists())
      .unwrap_or(first)
  }
}

impl SaveTrigger for DownloadsFolder {
  fn trigger(&self, staged: &Path, file_name: &str) -> io::Result<PathBuf> {
    std::fs::create_dir_all(&self.dir)?;
    let target = self.free_path(file_name);
    std::fs::copy(staged, &target)?;
    debug!(target = %target.display(), "copied staged artifact");
    Ok(target)
  }
}

// ─── Strategy selection ──────────────────────────────────────────────────────

/// The writers available on this host, in order of preference.
pub struct Strategies {
  direct:    Option<Box<dyn ArtifactWriter>>,
  transient: Box<dyn ArtifactWriter>,
}

impl Strategies {
  pub fn new(
    direct: Option<Box<dyn ArtifactWriter>>,
    transient: Box<dyn ArtifactWriter>,
  ) -> Self {
    Self { direct, transient }
  }

  /// Choose strategies from the host's capabilities. Direct writes are used
  /// only when a save prompt exists.
  pub fn detect(prompt: Option<Arc<dyn SavePrompt>>, trigger: Arc<dyn SaveTrigger>) -> Self {
    let direct = prompt.map(|p| Box::new(DirectWriter::new(p)) as Box<dyn ArtifactWriter>);
    info!(direct = direct.is_some(), "artifact save strategies selected");
    Self::new(direct, Box::new(TransientWriter::new(trigger)))
  }

  pub fn direct(&self) -> Option<&dyn ArtifactWriter> { self.direct.as_deref() }

  pub fn transient(&self) -> &dyn ArtifactWriter { self.transient.as_ref() }
}
