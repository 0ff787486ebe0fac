//! Durable "artifact available offline" markers.
//!
//! A [`DownloadRecord`] for a topic id is the sole definition of that topic
//! being available offline. Records are only ever replaced wholesale or
//! removed; the saved bytes themselves are outside this tracker's control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::store::{DownloadMap, DownloadRepository};

/// Marker that a save of a topic's artifact was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
  pub file_name:     String,
  pub downloaded_at: DateTime<Utc>,
  /// Where the save landed, when the strategy that wrote it knows.
  #[serde(default)]
  pub location:      Option<String>,
  /// Name of the strategy that produced this record.
  #[serde(default)]
  pub strategy:      Option<String>,
}

/// In-memory view of the download records, persisted on every change.
pub struct DownloadTracker<R> {
  records: DownloadMap,
  repo:    R,
}

impl<R: DownloadRepository> DownloadTracker<R> {
  /// Load persisted records; unreadable data is logged and treated as empty.
  pub fn load(repo: R) -> Self {
    let records = match repo.load_downloads() {
      Ok(records) => records,
      Err(e) => {
        warn!(error = %e, "download records unreadable; starting empty");
        DownloadMap::new()
      }
    };
    Self { records, repo }
  }

  /// Pure lookup; performs no IO.
  pub fn is_available_offline(&self, topic_id: &str) -> bool {
    self.records.contains_key(topic_id)
  }

  pub fn get(&self, topic_id: &str) -> Option<&DownloadRecord> {
    self.records.get(topic_id)
  }

  pub fn records(&self) -> &DownloadMap { &self.records }

  /// Store `record` for `topic_id`, replacing any earlier one.
  pub fn record(&mut self, topic_id: &str, record: DownloadRecord) {
    self.records.insert(topic_id.to_owned(), record);
    self.persist();
  }

  /// Forget the record for `topic_id`. Saved bytes are left where they are.
  pub fn evict(&mut self, topic_id: &str) -> Option<DownloadRecord> {
    let removed = self.records.remove(topic_id);
    if removed.is_some() {
      self.persist();
    }
    removed
  }

  fn persist(&self) {
    if let Err(e) = self.repo.save_downloads(&self.records) {
      error!(error = %e, "failed to persist download records");
    }
  }
}
