//! Error type for `gyan-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A previous holder of the connection panicked mid-statement.
  #[error("connection lock poisoned")]
  Poisoned,

  #[error("unknown theme value: {0:?}")]
  UnknownTheme(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
