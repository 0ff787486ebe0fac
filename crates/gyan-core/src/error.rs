//! Error types for `gyan-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("topic not found: {0}")]
  TopicNotFound(String),

  #[error("invalid catalog: {0}")]
  InvalidCatalog(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
