//! Tests for `gyan-artifacts`, with in-process fakes for every host
//! capability and throwaway axum servers for the HTTP clients.


use std::{
  path::PathBuf,
  sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

use async_trait::async_trait;
use bytes::Bytes;
use gyan_core::{download::DownloadTracker, memory::MemoryStore};
use tokio::sync::Semaphore;

use crate::{
  cache::{ArtifactCache, Platform},
  error::{AcquisitionError, OpenError, ShareError, WriteError},
  fetch::ArtifactFetcher,
  location::StorageLocation,
  share::{Clipboard, ShareSheet, UrlOpener},
  writer::{ArtifactWriter, Strategies, WriteOutcome},
};

pub(super) const PDF: &[u8] = b"%PDF-1.4 fake";

// ─── Fetcher ─────────────────────────────────────────────────────────────────

/// Serves a fixed response, optionally held until `gate` has a permit.
#[derive(Clone)]
pub(super) struct FakeFetcher {
  response: Arc<Mutex<Result<Bytes, AcquisitionError>>>,
  calls:    Arc<AtomicUsize>,
  urls:     Arc<Mutex<Vec<String>>>,
  gate:     Option<Arc<Semaphore>>,
}

impl FakeFetcher {
  pub(super) fn ok() -> Self {
    Self {
      response: Arc::new(Mutex::new(Ok(Bytes::from_static(PDF)))),
      calls:    Arc::default(),
      urls:     Arc::default(),
      gate:     None,
    }
  }

  pub(super) fn failing(err: AcquisitionError) -> Self {
    let fetcher = Self::ok();
    fetcher.respond_with(Err(err));
    fetcher
  }

  /// Change the response for every later fetch.
  pub(super) fn respond_with(&self, response: Result<Bytes, AcquisitionError>) {
    *self.response.lock().unwrap() = response;
  }

  pub(super) fn gated(gate: Arc<Semaphore>) -> Self { Self { gate: Some(gate), ..Self::ok() } }

  pub(super) fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

  pub(super) fn urls(&self) -> Vec<String> { self.urls.lock().unwrap().clone() }
}

impl ArtifactFetcher for FakeFetcher {
  fn fetch<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = Result<Bytes, AcquisitionError>> + Send + 'a {
    async move {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.urls.lock().unwrap().push(url.to_owned());
      if let Some(gate) = &self.gate {
        let _permit = gate.acquire().await.unwrap();
      }
      self.response.lock().unwrap().clone()
    }
  }
}

// ─── Writer ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
pub(super) enum Behaviour {
  Save,
  Cancel,
  Fail,
}

/// Records every write and answers with a fixed [`Behaviour`].
#[derive(Clone)]
pub(super) struct FakeWriter {
  name:      &'static str,
  behaviour: Behaviour,
  writes:    Arc<Mutex<Vec<(String, Bytes)>>>,
}

impl FakeWriter {
  pub(super) fn new(name: &'static str, behaviour: Behaviour) -> Self {
    Self { name, behaviour, writes: Arc::default() }
  }

  pub(super) fn writes(&self) -> Vec<(String, Bytes)> { self.writes.lock().unwrap().clone() }
}

#[async_trait]
impl ArtifactWriter for FakeWriter {
  fn name(&self) -> &'static str { self.name }

  async fn write(&self, bytes: Bytes, file_name: &str) -> Result<WriteOutcome, WriteError> {
    self.writes.lock().unwrap().push((file_name.to_owned(), bytes));
    match self.behaviour {
      Behaviour::Save => Ok(WriteOutcome::Saved {
        location: Some(PathBuf::from(format!("/saved/{}/{file_name}", self.name))),
      }),
      Behaviour::Cancel => Ok(WriteOutcome::Cancelled),
      Behaviour::Fail => Err(WriteError::Io(std::io::Error::other("disk full"))),
    }
  }
}

// ─── Share, clipboard, opener ────────────────────────────────────────────────

#[derive(Default)]
pub(super) struct FakeClipboard {
  pub(super) copied: Mutex<Vec<String>>,
  pub(super) fail:   bool,
}

impl Clipboard for FakeClipboard {
  fn copy(&self, text: &str) -> Result<(), ShareError> {
    if self.fail {
      return Err(ShareError::Clipboard("no terminal".into()));
    }
    self.copied.lock().unwrap().push(text.to_owned());
    Ok(())
  }
}

pub(super) struct FakeSheet {
  pub(super) result: Result<(), ShareError>,
  pub(super) shared: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl ShareSheet for FakeSheet {
  async fn share(&self, title: &str, text: &str, url: &str) -> Result<(), ShareError> {
    self
      .shared
      .lock()
      .unwrap()
      .push((title.to_owned(), text.to_owned(), url.to_owned()));
    self.result.clone()
  }
}

#[derive(Default)]
pub(super) struct FakeOpener {
  pub(super) opened: Mutex<Vec<String>>,
}

impl UrlOpener for FakeOpener {
  fn open(&self, url: &str) -> Result<(), OpenError> {
    self.opened.lock().unwrap().push(url.to_owned());
    Ok(())
  }
}

// ─── Fixture ─────────────────────────────────────────────────────────────────

pub(super) fn location() -> StorageLocation {
  StorageLocation::new("https://store.example", "pdfs")
}

/// Handles on the fakes behind a test cache.
pub(super) struct Harness {
  pub(super) repo:      MemoryStore,
  pub(super) clipboard: Arc<FakeClipboard>,
  pub(super) opener:    Arc<FakeOpener>,
}

pub(super) fn cache_with(
  fetcher: FakeFetcher,
  direct: Option<FakeWriter>,
  transient: FakeWriter,
  share_sheet: Option<Arc<FakeSheet>>,
) -> (ArtifactCache<FakeFetcher, MemoryStore>, Harness) {
  build(fetcher, direct, transient, share_sheet, FakeClipboard::default())
}

pub(super) fn build(
  fetcher: FakeFetcher,
  direct: Option<FakeWriter>,
  transient: FakeWriter,
  share_sheet: Option<Arc<FakeSheet>>,
  clipboard: FakeClipboard,
) -> (ArtifactCache<FakeFetcher, MemoryStore>, Harness) {
  let repo = MemoryStore::new();
  let clipboard = Arc::new(clipboard);
  let opener = Arc::new(FakeOpener::default());

  let platform = Platform {
    strategies:  Strategies::new(
      direct.map(|w| Box::new(w) as Box<dyn ArtifactWriter>),
      Box::new(transient),
    ),
    opener:      opener.clone(),
    share_sheet: share_sheet.map(|s| s as Arc<dyn ShareSheet>),
    clipboard:   clipboard.clone(),
  };

  let cache = ArtifactCache::new(
    fetcher,
    location(),
    DownloadTracker::load(repo.clone()),
    platform,
  );
  (cache, Harness { repo, clipboard, opener })
}
