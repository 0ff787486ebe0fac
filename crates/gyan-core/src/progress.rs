//! Per-topic completion and recency state.
//!
//! [`ProgressStore`] owns the live [`ContentCatalog`] and is the only writer
//! of a topic's progress fields. Every topic's live fields are the seed topic
//! overlaid with the latest [`ProgressRecord`] for its id. Each mutation is
//! re-persisted immediately; a failed write is logged and the in-memory state
//! stays authoritative for the session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
  Error, Result,
  catalog::{ContentCatalog, Topic},
  clock::{Clock, SystemClock},
  store::{ProgressMap, ProgressRepository},
};

/// The persisted progress state for one topic.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub struct ProgressRecord {
  pub is_completed: bool,
  pub last_read_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
  fn of(topic: &Topic) -> Self {
    Self { is_completed: topic.is_completed, last_read_at: topic.last_read_at }
  }

  fn apply_to(self, topic: &mut Topic) {
    topic.is_completed = self.is_completed;
    topic.last_read_at = self.last_read_at;
  }
}

/// Live catalog plus durable progress records.
pub struct ProgressStore<R, C = SystemClock> {
  catalog: ContentCatalog,
  records: ProgressMap,
  repo:    R,
  clock:   C,
}

impl<R: ProgressRepository> ProgressStore<R> {
  /// Load persisted progress over `catalog` using the wall clock.
  pub fn load(catalog: ContentCatalog, repo: R) -> Self {
    Self::load_with_clock(catalog, repo, SystemClock)
  }
}

impl<R: ProgressRepository, C: Clock> ProgressStore<R, C> {
  /// Load persisted progress over `catalog`.
  ///
  /// Malformed or unreadable records are logged and replaced by an empty
  /// mapping. Records for ids the catalog does not know are kept (so they
  /// survive a catalog that temporarily drops a topic) but not projected.
  pub fn load_with_clock(mut catalog: ContentCatalog, repo: R, clock: C) -> Self {
    let records = match repo.load_progress() {
      Ok(records) => records,
      Err(e) => {
        warn!(error = %e, "progress records unreadable; starting empty");
        ProgressMap::new()
      }
    };

    for (id, record) in &records {
      match catalog.topic_mut(id) {
        Some(topic) => record.apply_to(topic),
        None => debug!(topic_id = %id, "progress record for unknown topic"),
      }
    }

    Self { catalog, records, repo, clock }
  }

  /// The catalog with every topic's progress fields projected.
  pub fn catalog(&self) -> &ContentCatalog { &self.catalog }

  /// All persisted records, keyed by topic id.
  pub fn records(&self) -> &ProgressMap { &self.records }

  pub fn record(&self, topic_id: &str) -> Option<ProgressRecord> {
    self.records.get(topic_id).copied()
  }

  /// Flip `is_completed` and stamp `last_read_at`.
  ///
  /// Toggling twice restores `is_completed` but never rewinds `last_read_at`.
  pub fn toggle_completed(&mut self, topic_id: &str) -> Result<ProgressRecord> {
    self.update(topic_id, |record, now| {
      record.is_completed = !record.is_completed;
      record.last_read_at = Some(now);
    })
  }

  /// Stamp `last_read_at` without touching `is_completed`. Called whenever a
  /// topic is opened.
  pub fn touch_last_read(&mut self, topic_id: &str) -> Result<ProgressRecord> {
    self.update(topic_id, |record, now| {
      record.last_read_at = Some(now);
    })
  }

  /// Topics that have been read, most recent first, at most `limit` of them.
  /// Equal timestamps keep catalog order.
  pub fn recent_topics(&self, limit: usize) -> Vec<&Topic> {
    let mut read: Vec<&Topic> = self
      .catalog
      .topics()
      .map(|p| p.topic)
      .filter(|t| t.last_read_at.is_some())
      .collect();
    // `sort_by` is stable, which gives the catalog-order tie-break.
    read.sort_by(|a, b| b.last_read_at.cmp(&a.last_read_at));
    read.truncate(limit);
    read
  }

  fn update(
    &mut self,
    topic_id: &str,
    mutate: impl FnOnce(&mut ProgressRecord, DateTime<Utc>),
  ) -> Result<ProgressRecord> {
    let now = self.clock.now();
    let topic = self
      .catalog
      .topic_mut(topic_id)
      .ok_or_else(|| Error::TopicNotFound(topic_id.to_owned()))?;

    let mut record = ProgressRecord::of(topic);
    let stamp = monotonic_stamp(now, record.last_read_at);
    mutate(&mut record, stamp);
    record.apply_to(topic);

    self.records.insert(topic_id.to_owned(), record);
    self.persist();
    Ok(record)
  }

  fn persist(&self) {
    if let Err(e) = self.repo.save_progress(&self.records) {
      error!(error = %e, "failed to persist progress; keeping in-memory state");
    }
  }
}

/// `now`, unless the clock has not moved past `previous`, in which case one
/// millisecond after `previous`.
fn monotonic_stamp(
  now: DateTime<Utc>,
  previous: Option<DateTime<Utc>>,
) -> DateTime<Utc> {
  match previous {
    Some(prev) if now <= prev => prev + Duration::milliseconds(1),
    _ => now,
  }
}
