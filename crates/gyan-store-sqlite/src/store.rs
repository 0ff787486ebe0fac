//! [`SqliteStore`], the SQLite implementation of the Gyan repositories.

use std::{
  path::Path,
  sync::{Arc, Mutex, MutexGuard},
};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension as _};
use tracing::debug;

use gyan_core::{
  preferences::Theme,
  store::{
    DOWNLOADS_KEY, DownloadMap, DownloadRepository, PROGRESS_KEY,
    PreferenceRepository, ProgressMap, ProgressRepository, THEME_KEY,
  },
};

use crate::{
  Error, Result,
  encode::{
    decode_downloads, decode_progress, decode_theme, encode_downloads, encode_dt,
    encode_progress, encode_theme,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Gyan's local state backed by a single SQLite file.
///
/// Clones share the same connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening sqlite store");
    Self::init(Connection::open(path)?)
  }

  /// Open an in-memory store; useful for testing.
  pub fn open_in_memory() -> Result<Self> { Self::init(Connection::open_in_memory()?) }

  fn init(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn: Arc::new(Mutex::new(conn)) })
  }

  /// The `user_version` recorded by the schema.
  pub fn schema_version(&self) -> Result<i64> {
    let version = self
      .lock()?
      .query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
  }

  fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
    self.conn.lock().map_err(|_| Error::Poisoned)
  }

  fn get(&self, key: &str) -> Result<Option<String>> {
    let value = self
      .lock()?
      .query_row(
        "SELECT value FROM kv WHERE key = ?1",
        rusqlite::params![key],
        |r| r.get(0),
      )
      .optional()?;
    Ok(value)
  }

  fn put(&self, key: &str, value: &str) -> Result<()> {
    self.lock()?.execute(
      "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
       ON CONFLICT(key) DO UPDATE SET
         value = excluded.value,
         updated_at = excluded.updated_at",
      rusqlite::params![key, value, encode_dt(Utc::now())],
    )?;
    Ok(())
  }

  /// Remove `key` entirely. Removing a missing key is not an error.
  pub fn clear(&self, key: &str) -> Result<()> {
    self
      .lock()?
      .execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])?;
    Ok(())
  }
}

impl std::fmt::Debug for SqliteStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SqliteStore").finish_non_exhaustive()
  }
}

// ─── Repositories ────────────────────────────────────────────────────────────

impl ProgressRepository for SqliteStore {
  type Error = Error;

  fn load_progress(&self) -> Result<ProgressMap> {
    match self.get(PROGRESS_KEY)? {
      Some(raw) => decode_progress(&raw),
      None => Ok(ProgressMap::new()),
    }
  }

  fn save_progress(&self, records: &ProgressMap) -> Result<()> {
    self.put(PROGRESS_KEY, &encode_progress(records)?)
  }
}

impl DownloadRepository for SqliteStore {
  type Error = Error;

  fn load_downloads(&self) -> Result<DownloadMap> {
    match self.get(DOWNLOADS_KEY)? {
      Some(raw) => decode_downloads(&raw),
      None => Ok(DownloadMap::new()),
    }
  }

  fn save_downloads(&self, records: &DownloadMap) -> Result<()> {
    self.put(DOWNLOADS_KEY, &encode_downloads(records)?)
  }
}

impl PreferenceRepository for SqliteStore {
  type Error = Error;

  fn load_theme(&self) -> Result<Option<Theme>> {
    self.get(THEME_KEY)?.as_deref().map(decode_theme).transpose()
  }

  fn save_theme(&self, theme: Theme) -> Result<()> {
    self.put(THEME_KEY, &encode_theme(theme))
  }
}

#[cfg(test)]
impl SqliteStore {
  /// Write a raw value, bypassing encoding.
  pub(crate) fn put_raw(&self, key: &str, value: &str) -> Result<()> { self.put(key, value) }

  pub(crate) fn get_raw(&self, key: &str) -> Result<Option<String>> { self.get(key) }
}
