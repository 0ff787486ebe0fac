//! Application state and key dispatch.
//!
//! [`App`] owns the navigation controller and the stores behind it. Keys are
//! mapped to navigation [`Action`]s; artifact keys on the content view go to
//! the [`ArtifactCache`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gyan_artifacts::{ArtifactCache, HttpFetcher, RemoteMetadata, share::ShareOutcome};
use gyan_core::{
  artifact::{ArtifactLocator, ArtifactRef},
  catalog::{ContentCatalog, LabelContext, Topic},
  nav::{Action, DASHBOARD_RECENT_LIMIT, HOME_RECENT_LIMIT, NavigationController, Outcome, View},
  preferences::{Preferences, Theme},
  progress::ProgressStore,
  summary::ProgressSummary,
};
use gyan_store_sqlite::SqliteStore;
use tracing::{info, warn};

pub type Cache = ArtifactCache<HttpFetcher, SqliteStore>;
pub type Locator = ArtifactLocator<RemoteMetadata>;

// ─── Entries ─────────────────────────────────────────────────────────────────

/// One selectable row in a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub icon:   String,
  pub label:  String,
  pub detail: String,
  pub done:   bool,
  pub action: Action,
}

impl Entry {
  fn topic(topic: &Topic, detail: String) -> Self {
    Self {
      icon: if topic.is_completed { "✓".into() } else { "·".into() },
      label: topic.label(LabelContext::Display).to_owned(),
      detail,
      done: topic.is_completed,
      action: Action::OpenTopic(topic.id.clone()),
    }
  }
}

// ─── App ─────────────────────────────────────────────────────────────────────

pub struct App {
  pub nav:        NavigationController,
  pub progress:   ProgressStore<SqliteStore>,
  pub prefs:      Preferences<SqliteStore>,
  pub cache:      Cache,
  pub locator:    Option<Locator>,
  /// Cursor within [`App::entries`].
  pub cursor:     usize,
  /// Scroll offset of the content view.
  pub scroll:     u16,
  /// Search text being typed, when the search prompt is open.
  pub search:     Option<String>,
  /// Artifact for the topic in the content view, if one resolved.
  pub artifact:   Option<ArtifactRef>,
  pub status_msg: String,
}

impl App {
  pub fn new(
    catalog: ContentCatalog,
    store: SqliteStore,
    cache: Cache,
    locator: Option<Locator>,
  ) -> Self {
    Self {
      nav: NavigationController::new(),
      progress: ProgressStore::load(catalog, store.clone()),
      prefs: Preferences::load(store),
      cache,
      locator,
      cursor: 0,
      scroll: 0,
      search: None,
      artifact: None,
      status_msg: String::new(),
    }
  }

  pub fn catalog(&self) -> &ContentCatalog { self.progress.catalog() }

  pub fn theme(&self) -> Theme { self.prefs.theme() }

  pub fn title(&self) -> String { self.nav.title(self.catalog()) }

  pub fn summary(&self) -> ProgressSummary {
    ProgressSummary::compute(self.catalog(), &chrono::Local::now())
  }

  /// The topic shown in the content view.
  pub fn current_topic(&self) -> Option<&Topic> {
    match self.nav.view() {
      View::Content { topic_id, .. } => self.catalog().find_topic(topic_id),
      _ => None,
    }
  }

  /// Selectable rows for the current view.
  pub fn entries(&self) -> Vec<Entry> {
    let catalog = self.catalog();
    match self.nav.view() {
      View::Home => {
        let recent = self
          .progress
          .recent_topics(HOME_RECENT_LIMIT)
          .into_iter()
          .map(|t| Entry::topic(t, "recent".into()));
        let subjects = catalog.list_subjects().iter().map(|s| Entry {
          icon:   s.icon.clone(),
          label:  s.display_name.clone(),
          detail: format!("{} topics", s.topics().count()),
          done:   false,
          action: Action::OpenSubject(s.id.clone()),
        });
        recent.chain(subjects).collect()
      }
      View::Subjects => catalog
        .list_subjects()
        .iter()
        .map(|s| {
          let total = s.topics().count();
          let done = s.topics().filter(|t| t.is_completed).count();
          Entry {
            icon:   s.icon.clone(),
            label:  s.display_name.clone(),
            detail: format!("{done}/{total}"),
            done:   total > 0 && done == total,
            action: Action::OpenSubject(s.id.clone()),
          }
        })
        .collect(),
      View::Chapters { subject_id } => catalog
        .find_subject(subject_id)
        .map(|s| {
          s.chapters
            .iter()
            .map(|c| Entry {
              icon:   "▸".into(),
              label:  c.display_name.clone(),
              detail: format!("{} topics", c.topics.len()),
              done:   false,
              action: Action::OpenChapter(c.id.clone()),
            })
            .collect()
        })
        .unwrap_or_default(),
      View::Topics { chapter_id, .. } => catalog
        .find_chapter(chapter_id)
        .map(|c| c.topics.iter().map(|t| Entry::topic(t, t.kind.to_string())).collect())
        .unwrap_or_default(),
      View::Search { hits, .. } => hits
        .iter()
        .filter_map(|hit| {
          let path = catalog.locate_topic(&hit.topic_id)?;
          let mut entry = Entry::topic(path.topic, hit.matched_excerpt.clone());
          entry.label = path.topic.label(LabelContext::Search).to_owned();
          Some(entry)
        })
        .collect(),
      View::Progress => self
        .progress
        .recent_topics(DASHBOARD_RECENT_LIMIT)
        .into_iter()
        .map(|t| {
          let when = t
            .last_read_at
            .map(|at| at.with_timezone(&chrono::Local).format("%d %b %H:%M").to_string())
            .unwrap_or_default();
          Entry::topic(t, when)
        })
        .collect(),
      View::Content { .. } => Vec::new(),
    }
  }

  // ── Dispatch ────────────────────────────────────────────────────────────

  /// Apply a navigation action and refresh view-local state.
  pub async fn dispatch(&mut self, action: Action) -> Outcome {
    let outcome = self.nav.dispatch(action, &mut self.progress);
    if outcome == Outcome::Moved {
      self.cursor = 0;
      self.scroll = 0;
      self.status_msg.clear();
      self.refresh_artifact().await;
    }
    outcome
  }

  async fn refresh_artifact(&mut self) {
    self.artifact = None;
    let Some(topic) = self.current_topic().cloned() else {
      return;
    };
    self.artifact = match &self.locator {
      Some(locator) => locator.resolve(&topic).await,
      None => topic.artifact_path.as_ref().map(|path| ArtifactRef {
        path:  path.clone(),
        title: topic.display_name.clone(),
      }),
    };
  }

  // ── Key handling ────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.search.is_some() {
      self.handle_search_key(key).await;
      return true;
    }

    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('1') => {
        self.dispatch(Action::Home).await;
      }
      KeyCode::Char('2') => {
        self.dispatch(Action::Subjects).await;
      }
      KeyCode::Char('3') => {
        self.dispatch(Action::Progress).await;
      }
      KeyCode::Char('t') => {
        let theme = self.prefs.toggle_theme();
        self.status_msg = format!("Theme: {theme}");
      }
      KeyCode::Char('/') => self.search = Some(self.nav.query().to_owned()),
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.dispatch(Action::Back).await;
      }
      _ if matches!(self.nav.view(), View::Content { .. }) => self.handle_content_key(key).await,
      _ => self.handle_list_key(key).await,
    }
    true
  }

  async fn handle_search_key(&mut self, key: KeyEvent) {
    let Some(query) = self.search.as_mut() else {
      return;
    };
    match key.code {
      KeyCode::Esc => self.search = None,
      KeyCode::Backspace => {
        query.pop();
      }
      KeyCode::Char(c) => query.push(c),
      KeyCode::Enter => {
        let query = self.search.take().unwrap_or_default();
        self.dispatch(Action::Search(query)).await;
      }
      _ => {}
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) {
    let entries = self.entries();
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.cursor + 1 < entries.len() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(entry) = entries.into_iter().nth(self.cursor) {
          self.dispatch(entry.action).await;
        }
      }
      _ => {}
    }
  }

  async fn handle_content_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
      KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
      KeyCode::Char('c') => {
        self.dispatch(Action::ToggleCompleted).await;
        if let Some(topic) = self.current_topic() {
          self.status_msg =
            if topic.is_completed { "Marked complete".into() } else { "Marked incomplete".into() };
        }
      }
      KeyCode::Char('o') => self.open_artifact(),
      KeyCode::Char('d') => self.download_artifact().await,
      KeyCode::Char('s') => self.share_artifact().await,
      KeyCode::Char('x') => self.evict_artifact(),
      _ => {}
    }
  }

  // ── Artifact actions ────────────────────────────────────────────────────

  fn current_artifact(&mut self) -> Option<(ArtifactRef, String)> {
    let topic_id = self.current_topic()?.id.clone();
    match &self.artifact {
      Some(artifact) => Some((artifact.clone(), topic_id)),
      None => {
        self.status_msg = "No PDF for this topic".into();
        None
      }
    }
  }

  fn open_artifact(&mut self) {
    let Some((artifact, _)) = self.current_artifact() else {
      return;
    };
    let url = self.cache.url_for(&artifact);
    self.status_msg = match self.cache.open_existing(&url) {
      Ok(()) => "Opened in browser".into(),
      Err(e) => {
        warn!(error = %e, "open failed");
        format!("Error: {e}")
      }
    };
  }

  async fn download_artifact(&mut self) {
    let Some((artifact, topic_id)) = self.current_artifact() else {
      return;
    };
    let file_name = artifact.suggested_file_name();
    self.status_msg = match self.cache.acquire(&artifact, &file_name, &topic_id).await {
      Ok(record) => {
        info!(%topic_id, %file_name, "download complete");
        match record.location {
          Some(location) => format!("Saved to {location}"),
          None => format!("Saved {file_name}"),
        }
      }
      Err(e) if e.is_retryable() => format!("Download failed: {e} (press d to retry)"),
      Err(e) => format!("Download failed: {e}"),
    };
  }

  async fn share_artifact(&mut self) {
    let Some((artifact, topic_id)) = self.current_artifact() else {
      return;
    };
    let url = self.cache.url_for(&artifact);
    let name = self
      .catalog()
      .find_topic(&topic_id)
      .map(|t| t.label(LabelContext::Display).to_owned())
      .unwrap_or(artifact.title);
    self.status_msg = match self.cache.share(&url, &name).await {
      Ok(ShareOutcome::Shared) => "Shared".into(),
      Ok(ShareOutcome::CopiedToClipboard) => "Link copied to clipboard".into(),
      Err(e) => format!("Could not share: {e}"),
    };
  }

  fn evict_artifact(&mut self) {
    let Some(topic_id) = self.current_topic().map(|t| t.id.clone()) else {
      return;
    };
    self.status_msg = match self.cache.evict(&topic_id) {
      Some(_) => "Removed from offline list".into(),
      None => "Not downloaded".into(),
    };
  }

  /// Whether the topic in the content view is marked available offline.
  pub fn is_offline(&self) -> bool {
    self
      .current_topic()
      .is_some_and(|t| self.cache.is_available_offline(&t.id))
  }
}
