//! [`ArtifactCache`]: acquisition, offline tracking, open and share.
//!
//! An acquisition fetches the artifact once, then offers the bytes to the
//! direct-write strategy (if the host has one) and falls through to the
//! transient strategy when the user cancels or the direct write fails. The
//! [`DownloadRecord`] is written only after a strategy reports the save as
//! done or initiated. Fetch failures abort before any strategy runs.
//!
//! Acquisitions are single-flight per topic id: a caller arriving while one
//! is running joins it and receives a clone of its result.

use std::{
  collections::HashMap,
  path::PathBuf,
  sync::{Arc, Mutex, MutexGuard},
};

use bytes::Bytes;
use gyan_core::{
  artifact::ArtifactRef,
  clock::{Clock, SystemClock},
  download::{DownloadRecord, DownloadTracker},
  store::DownloadRepository,
};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::{
  error::{AcquisitionError, OpenError, ShareError},
  fetch::ArtifactFetcher,
  location::StorageLocation,
  share::{Clipboard, ShareOutcome, ShareSheet, UrlOpener},
  writer::{Strategies, WriteOutcome},
};

type Acquisition = Result<DownloadRecord, AcquisitionError>;
type Flight = Arc<OnceCell<Acquisition>>;

/// The host capabilities the cache drives.
pub struct Platform {
  pub strategies:  Strategies,
  pub opener:      Arc<dyn UrlOpener>,
  pub share_sheet: Option<Arc<dyn ShareSheet>>,
  pub clipboard:   Arc<dyn Clipboard>,
}

pub struct ArtifactCache<F, R> {
  fetcher:   F,
  location:  StorageLocation,
  tracker:   Mutex<DownloadTracker<R>>,
  platform:  Platform,
  clock:     Box<dyn Clock>,
  in_flight: Mutex<HashMap<String, Flight>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> { m.lock().unwrap_or_else(|p| p.into_inner()) }

impl<F: ArtifactFetcher, R: DownloadRepository> ArtifactCache<F, R> {
  pub fn new(
    fetcher: F,
    location: StorageLocation,
    tracker: DownloadTracker<R>,
    platform: Platform,
  ) -> Self {
    Self {
      fetcher,
      location,
      tracker: Mutex::new(tracker),
      platform,
      clock: Box::new(SystemClock),
      in_flight: Mutex::new(HashMap::new()),
    }
  }

  /// Stamp download records with `clock` instead of the wall clock.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Box::new(clock);
    self
  }

  // ── Offline markers ─────────────────────────────────────────────────────

  /// Whether a download record exists for `topic_id`. No IO.
  pub fn is_available_offline(&self, topic_id: &str) -> bool {
    lock(&self.tracker).is_available_offline(topic_id)
  }

  pub fn download_record(&self, topic_id: &str) -> Option<DownloadRecord> {
    lock(&self.tracker).get(topic_id).cloned()
  }

  /// Drop the download record for `topic_id`. Saved files are left alone.
  pub fn evict(&self, topic_id: &str) -> Option<DownloadRecord> {
    let removed = lock(&self.tracker).evict(topic_id);
    if removed.is_some() {
      info!(topic_id, "download record evicted");
    }
    removed
  }

  /// The public URL of `artifact`.
  pub fn url_for(&self, artifact: &ArtifactRef) -> String {
    self.location.public_url(&artifact.path)
  }

  // ── Acquisition ─────────────────────────────────────────────────────────

  /// Fetch `artifact` and save it as `suggested_file_name`, recording
  /// `topic_id` as available offline on success.
  pub async fn acquire(
    &self,
    artifact: &ArtifactRef,
    suggested_file_name: &str,
    topic_id: &str,
  ) -> Acquisition {
    let flight = {
      let mut in_flight = lock(&self.in_flight);
      let flight = in_flight.entry(topic_id.to_owned()).or_default();
      if Arc::strong_count(flight) > 1 {
        debug!(topic_id, "joining in-flight acquisition");
      }
      Arc::clone(flight)
    };

    let result = flight
      .get_or_init(|| self.run(artifact, suggested_file_name, topic_id))
      .await
      .clone();

    let mut in_flight = lock(&self.in_flight);
    if in_flight.get(topic_id).is_some_and(|f| Arc::ptr_eq(f, &flight)) {
      in_flight.remove(topic_id);
    }
    result
  }

  async fn run(&self, artifact: &ArtifactRef, file_name: &str, topic_id: &str) -> Acquisition {
    let url = self.url_for(artifact);
    info!(topic_id, %url, "acquiring artifact");

    let bytes = self.fetcher.fetch(&url).await.inspect_err(|e| {
      warn!(topic_id, %url, error = %e, "artifact fetch failed");
    })?;

    let (strategy, location) = self.save(bytes, file_name).await.inspect_err(|e| {
      warn!(topic_id, error = %e, "artifact could not be saved");
    })?;

    let record = DownloadRecord {
      file_name:     file_name.to_owned(),
      downloaded_at: self.clock.now(),
      location:      location.map(|p| p.display().to_string()),
      strategy:      Some(strategy.to_owned()),
    };
    lock(&self.tracker).record(topic_id, record.clone());
    info!(topic_id, strategy, "artifact saved");
    Ok(record)
  }

  async fn save(
    &self,
    bytes: Bytes,
    file_name: &str,
  ) -> Result<(&'static str, Option<PathBuf>), AcquisitionError> {
    if let Some(direct) = self.platform.strategies.direct() {
      match direct.write(bytes.clone(), file_name).await {
        Ok(WriteOutcome::Saved { location }) => return Ok((direct.name(), location)),
        Ok(WriteOutcome::Cancelled) => {
          info!(file_name, "direct save cancelled; falling back to transient save");
        }
        Err(e) => {
          warn!(file_name, error = %e, "direct save failed; falling back to transient save");
        }
      }
    }

    let transient = self.platform.strategies.transient();
    match transient.write(bytes, file_name).await {
      Ok(WriteOutcome::Saved { location }) => Ok((transient.name(), location)),
      Ok(WriteOutcome::Cancelled) => Err(AcquisitionError::write("save was cancelled")),
      Err(e) => Err(AcquisitionError::write(e)),
    }
  }

  // ── Open and share ──────────────────────────────────────────────────────

  /// Open the artifact at its remote URL. Independent of [`Self::acquire`].
  pub fn open_existing(&self, url: &str) -> Result<(), OpenError> {
    self.platform.opener.open(url)
  }

  /// Share `url` through the host's share sheet, falling back to copying it
  /// to the clipboard.
  pub async fn share(&self, url: &str, display_name: &str) -> Result<ShareOutcome, ShareError> {
    if let Some(sheet) = &self.platform.share_sheet {
      let text = format!("PDF notes: {display_name}");
      match sheet.share(display_name, &text, url).await {
        Ok(()) => return Ok(ShareOutcome::Shared),
        Err(e) => warn!(url, error = %e, "share sheet failed; copying link instead"),
      }
    }

    self.platform.clipboard.copy(url).map_err(|e| {
      warn!(url, error = %e, "clipboard copy failed");
      match e {
        ShareError::Clipboard(_) => e,
        other => ShareError::Clipboard(other.to_string()),
      }
    })?;
    Ok(ShareOutcome::CopiedToClipboard)
  }
}
