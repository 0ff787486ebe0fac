//! Error types for `gyan-artifacts`.
//!
//! Only [`AcquisitionError`] is meant to reach the user. The others are
//! logged and degraded by their callers.

use std::io;

use thiserror::Error;

// ─── Acquisition ─────────────────────────────────────────────────────────────

/// What went wrong during an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionErrorKind {
  /// The storage server answered with a non-success status.
  Http(u16),
  /// The request never completed, or the body could not be read.
  Network,
  /// The bytes arrived but no strategy could save them.
  Write,
}

/// A failed acquisition. Cloneable so that every caller joined to the same
/// in-flight acquisition receives the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AcquisitionError {
  pub kind:   AcquisitionErrorKind,
  pub reason: String,
}

impl AcquisitionError {
  pub fn http(status: u16, url: &str) -> Self {
    Self {
      kind:   AcquisitionErrorKind::Http(status),
      reason: format!("GET {url} returned {status}"),
    }
  }

  pub fn network(err: impl std::fmt::Display) -> Self {
    Self { kind: AcquisitionErrorKind::Network, reason: err.to_string() }
  }

  pub fn write(err: impl std::fmt::Display) -> Self {
    Self { kind: AcquisitionErrorKind::Write, reason: err.to_string() }
  }

  /// Whether re-invoking the acquisition could plausibly succeed.
  pub fn is_retryable(&self) -> bool {
    match self.kind {
      AcquisitionErrorKind::Http(status) => status >= 500 || status == 429,
      AcquisitionErrorKind::Network | AcquisitionErrorKind::Write => true,
    }
  }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// The metadata service could not be queried.
#[derive(Debug, Error)]
pub enum ResolutionError {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  #[error("metadata request failed: {0}")]
  Request(#[source] reqwest::Error),

  #[error("metadata service returned {0}")]
  Status(u16),

  #[error("malformed metadata: {0}")]
  Decode(#[source] reqwest::Error),
}

// ─── Writers ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum WriteError {
  #[error("io error: {0}")]
  Io(#[from] io::Error),

  #[error("background task failed: {0}")]
  Join(#[from] tokio::task::JoinError),

  /// The host could not start the save.
  #[error("save could not be triggered: {0}")]
  Trigger(#[source] io::Error),
}

// ─── Share and open ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
  /// The host has no share capability, or it refused this payload.
  #[error("sharing is unavailable")]
  Unavailable,

  #[error("share failed: {0}")]
  Failed(String),

  /// The clipboard fallback failed as well.
  #[error("could not copy to clipboard: {0}")]
  Clipboard(String),
}

#[derive(Debug, Error)]
#[error("could not open {url}: {source}")]
pub struct OpenError {
  pub url:    String,
  #[source]
  pub source: io::Error,
}
