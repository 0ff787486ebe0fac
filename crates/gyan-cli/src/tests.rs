//! Tests for settings layering and key handling.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gyan_artifacts::{
  ArtifactCache, HttpFetcher, Platform, StorageLocation,
  share::SystemOpener,
  writer::{DownloadsFolder, Strategies},
};
use gyan_core::{
  download::DownloadTracker,
  nav::View,
  preferences::Theme,
  seed::seed_catalog,
};
use gyan_store_sqlite::SqliteStore;
use tempfile::TempDir;

use crate::{
  app::App,
  clipboard::{Osc52Clipboard, osc52},
  settings::{DEFAULT_BUCKET, Overrides, Settings},
};

// ─── Settings ────────────────────────────────────────────────────────────────

#[test]
fn bucket_defaults_to_pdfs() {
  let settings = Settings::from_toml("", Overrides::default()).unwrap();
  assert_eq!(settings.bucket, DEFAULT_BUCKET);
  assert_eq!(settings.metadata_url, None);
}

#[test]
fn flags_override_the_file() {
  let toml = r#"
    metadata_url = "https://file.example"
    api_key = "from-file"
    bucket = "notes"
  "#;
  let overrides = Overrides {
    api_key: Some("from-flag".into()),
    ..Overrides::default()
  };

  let settings = Settings::from_toml(toml, overrides).unwrap();

  assert_eq!(settings.metadata_url.as_deref(), Some("https://file.example"));
  assert_eq!(settings.api_key, "from-flag");
  assert_eq!(settings.bucket, "notes");
}

#[test]
fn storage_url_falls_back_to_metadata_url() {
  let settings = Settings::from_toml(r#"metadata_url = "https://x.example""#, Overrides::default())
    .unwrap();
  assert_eq!(settings.storage_url(), Some("https://x.example"));

  let settings = Settings::from_toml(
    "metadata_url = \"https://x.example\"\nstorage_url = \"https://cdn.example\"",
    Overrides::default(),
  )
  .unwrap();
  assert_eq!(settings.storage_url(), Some("https://cdn.example"));
}

#[test]
fn osc52_wraps_base64() {
  assert_eq!(osc52("hi"), "\x1b]52;c;aGk=\x07");
}

// ─── App ─────────────────────────────────────────────────────────────────────

fn app(downloads: &TempDir) -> App {
  let store = SqliteStore::open_in_memory().unwrap();
  let platform = Platform {
    strategies:  Strategies::detect(None, Arc::new(DownloadsFolder::new(downloads.path()))),
    opener:      Arc::new(SystemOpener),
    share_sheet: None,
    clipboard:   Arc::new(Osc52Clipboard),
  };
  let cache = ArtifactCache::new(
    HttpFetcher::new(),
    StorageLocation::new("http://127.0.0.1:9", "pdfs"),
    DownloadTracker::load(store.clone()),
    platform,
  );
  App::new(seed_catalog().unwrap(), store, cache, None)
}

fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

async fn press(app: &mut App, codes: &[KeyCode]) {
  for &code in codes {
    assert!(app.handle_key(key(code)).await);
  }
}

#[tokio::test]
async fn quit_keys() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);
  assert!(!app.handle_key(key(KeyCode::Char('q'))).await);
  assert!(
    !app
      .handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
      .await
  );
}

#[tokio::test]
async fn browse_into_a_topic_and_complete_it() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);

  press(&mut app, &[KeyCode::Char('2'), KeyCode::Enter]).await;
  assert!(matches!(app.nav.view(), View::Chapters { .. }));

  press(&mut app, &[KeyCode::Enter, KeyCode::Enter]).await;
  let topic_id = match app.nav.view() {
    View::Content { topic_id, .. } => topic_id.clone(),
    other => panic!("expected content view, got {other:?}"),
  };
  assert!(app.catalog().find_topic(&topic_id).unwrap().last_read_at.is_some());

  press(&mut app, &[KeyCode::Char('c')]).await;
  assert!(app.catalog().find_topic(&topic_id).unwrap().is_completed);
  assert_eq!(app.status_msg, "Marked complete");

  press(&mut app, &[KeyCode::Esc]).await;
  assert!(matches!(app.nav.view(), View::Topics { .. }));
  assert!(app.entries()[0].done);
}

#[tokio::test]
async fn cursor_stays_in_bounds() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);
  press(&mut app, &[KeyCode::Char('2')]).await;
  let count = app.entries().len();

  for _ in 0..count + 5 {
    press(&mut app, &[KeyCode::Char('j')]).await;
  }
  assert_eq!(app.cursor, count - 1);

  for _ in 0..count + 5 {
    press(&mut app, &[KeyCode::Char('k')]).await;
  }
  assert_eq!(app.cursor, 0);
}

#[tokio::test]
async fn search_prompt_runs_a_query() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);

  press(&mut app, &[KeyCode::Char('/')]).await;
  for c in "buddh".chars() {
    press(&mut app, &[KeyCode::Char(c)]).await;
  }
  assert_eq!(app.search.as_deref(), Some("buddh"));
  press(&mut app, &[KeyCode::Enter]).await;

  assert!(app.search.is_none());
  match app.nav.view() {
    View::Search { query, hits } => {
      assert_eq!(query, "buddh");
      assert!(hits.iter().any(|h| h.topic_id == "buddhism"));
    }
    other => panic!("expected search view, got {other:?}"),
  }
}

#[tokio::test]
async fn escape_cancels_the_search_prompt() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);

  press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('x'), KeyCode::Esc]).await;

  assert!(app.search.is_none());
  assert_eq!(app.nav.view(), &View::Home);
}

#[tokio::test]
async fn theme_toggle_persists() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);
  assert_eq!(app.theme(), Theme::Light);

  press(&mut app, &[KeyCode::Char('t')]).await;

  assert_eq!(app.theme(), Theme::Dark);
  assert_eq!(app.status_msg, "Theme: dark");
}

#[tokio::test]
async fn artifact_keys_without_an_artifact_report_it() {
  let dir = TempDir::new().unwrap();
  let mut app = app(&dir);
  press(&mut app, &[KeyCode::Char('2'), KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]).await;
  assert!(app.artifact.is_none());

  press(&mut app, &[KeyCode::Char('d')]).await;
  assert_eq!(app.status_msg, "No PDF for this topic");

  press(&mut app, &[KeyCode::Char('x')]).await;
  assert_eq!(app.status_msg, "Not downloaded");
  assert!(!app.is_offline());
}
