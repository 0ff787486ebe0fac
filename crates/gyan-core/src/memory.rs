//! An in-process key/value store implementing every repository trait.
//!
//! Values are kept in the same serialised form a durable backend would
//! persist, so malformed-data and failed-write paths can be exercised without
//! a database.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard},
};

use thiserror::Error;

use crate::{
  preferences::Theme,
  store::{
    DOWNLOADS_KEY, DownloadMap, DownloadRepository, PROGRESS_KEY,
    PreferenceRepository, ProgressMap, ProgressRepository, THEME_KEY,
  },
};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("write to {0:?} rejected")]
  WriteRejected(String),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unknown theme value: {0:?}")]
  UnknownTheme(String),
}

#[derive(Debug, Default)]
struct Inner {
  entries:     HashMap<String, String>,
  fail_writes: bool,
}

/// Shared in-memory key/value store.
///
/// Clones observe the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    self.inner.lock().unwrap_or_else(|p| p.into_inner())
  }

  /// The raw stored value for `key`.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.lock().entries.get(key).cloned()
  }

  /// Overwrite the raw value for `key`, bypassing serialisation.
  pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
    self.lock().entries.insert(key.to_owned(), value.into());
  }

  /// Remove `key` entirely.
  pub fn clear(&self, key: &str) { self.lock().entries.remove(key); }

  /// Make every subsequent write fail, simulating an exhausted quota.
  pub fn set_fail_writes(&self, fail: bool) { self.lock().fail_writes = fail; }

  fn put(&self, key: &str, value: String) -> Result<(), MemoryError> {
    let mut inner = self.lock();
    if inner.fail_writes {
      return Err(MemoryError::WriteRejected(key.to_owned()));
    }
    inner.entries.insert(key.to_owned(), value);
    Ok(())
  }
}

impl ProgressRepository for MemoryStore {
  type Error = MemoryError;

  fn load_progress(&self) -> Result<ProgressMap, MemoryError> {
    match self.raw(PROGRESS_KEY) {
      Some(raw) => Ok(serde_json::from_str(&raw)?),
      None => Ok(ProgressMap::new()),
    }
  }

  fn save_progress(&self, records: &ProgressMap) -> Result<(), MemoryError> {
    self.put(PROGRESS_KEY, serde_json::to_string(records)?)
  }
}

impl DownloadRepository for MemoryStore {
  type Error = MemoryError;

  fn load_downloads(&self) -> Result<DownloadMap, MemoryError> {
    match self.raw(DOWNLOADS_KEY) {
      Some(raw) => Ok(serde_json::from_str(&raw)?),
      None => Ok(DownloadMap::new()),
    }
  }

  fn save_downloads(&self, records: &DownloadMap) -> Result<(), MemoryError> {
    self.put(DOWNLOADS_KEY, serde_json::to_string(records)?)
  }
}

impl PreferenceRepository for MemoryStore {
  type Error = MemoryError;

  fn load_theme(&self) -> Result<Option<Theme>, MemoryError> {
    self
      .raw(THEME_KEY)
      .map(|raw| raw.parse().map_err(|_| MemoryError::UnknownTheme(raw)))
      .transpose()
  }

  fn save_theme(&self, theme: Theme) -> Result<(), MemoryError> {
    self.put(THEME_KEY, theme.to_string())
  }
}
