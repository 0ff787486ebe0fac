//! The navigation state machine.
//!
//! [`NavigationController`] turns user [`Action`]s into the active [`View`].
//! It reads the catalog through the [`ProgressStore`] and is responsible for
//! stamping a topic as read whenever it is opened.

use serde::Serialize;
use tracing::debug;

use crate::{
  catalog::{ContentCatalog, LabelContext},
  clock::Clock,
  progress::ProgressStore,
  search::{SearchHit, search},
  store::ProgressRepository,
};

/// Number of recent topics listed on the home view.
pub const HOME_RECENT_LIMIT: usize = 3;

/// Number of recent topics fed to the progress dashboard.
pub const DASHBOARD_RECENT_LIMIT: usize = 5;

// ─── View ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
  Home,
  Subjects,
  Chapters {
    subject_id: String,
  },
  Topics {
    subject_id: String,
    chapter_id: String,
  },
  Content {
    subject_id: String,
    chapter_id: String,
    topic_id:   String,
  },
  Search {
    query: String,
    hits:  Vec<SearchHit>,
  },
  Progress,
}

// ─── Action ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Home,
  Subjects,
  OpenSubject(String),
  OpenChapter(String),
  OpenTopic(String),
  /// Flip completion of the topic in the content view.
  ToggleCompleted,
  Search(String),
  Progress,
  Back,
}

/// Whether an action changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Moved,
  /// The view is unchanged but progress state was updated.
  Updated,
  /// The action did not apply (unknown id, or not valid in this view).
  Ignored,
}

// ─── Controller ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NavigationController {
  view:  View,
  query: String,
}

impl Default for NavigationController {
  fn default() -> Self { Self::new() }
}

impl NavigationController {
  pub fn new() -> Self { Self { view: View::Home, query: String::new() } }

  pub fn view(&self) -> &View { &self.view }

  /// The most recent search query; cleared when returning home.
  pub fn query(&self) -> &str { &self.query }

  /// Apply `action`, reading and updating `progress` as needed.
  pub fn dispatch<R, C>(
    &mut self,
    action: Action,
    progress: &mut ProgressStore<R, C>,
  ) -> Outcome
  where
    R: ProgressRepository,
    C: Clock,
  {
    debug!(?action, "navigation action");
    match action {
      Action::Home => {
        self.go_home();
        Outcome::Moved
      }
      Action::Subjects => self.go(View::Subjects),
      Action::Progress => self.go(View::Progress),
      Action::OpenSubject(id) => self.open_subject(progress.catalog(), &id),
      Action::OpenChapter(id) => self.open_chapter(progress.catalog(), &id),
      Action::OpenTopic(id) => self.open_topic(progress, &id),
      Action::ToggleCompleted => match &self.view {
        View::Content { topic_id, .. } => {
          match progress.toggle_completed(topic_id) {
            Ok(_) => Outcome::Updated,
            Err(_) => Outcome::Ignored,
          }
        }
        _ => Outcome::Ignored,
      },
      Action::Search(query) => self.search(progress.catalog(), query),
      Action::Back => self.back(progress.catalog()),
    }
  }

  /// A human-readable title for the current view.
  pub fn title(&self, catalog: &ContentCatalog) -> String {
    match &self.view {
      View::Home => "Gyan".to_owned(),
      View::Subjects => "All subjects".to_owned(),
      View::Chapters { subject_id } => catalog
        .find_subject(subject_id)
        .map(|s| s.display_name.clone())
        .unwrap_or_else(|| "Chapters".to_owned()),
      View::Topics { chapter_id, .. } => catalog
        .find_chapter(chapter_id)
        .map(|c| c.display_name.clone())
        .unwrap_or_else(|| "Topics".to_owned()),
      View::Content { topic_id, .. } => catalog
        .find_topic(topic_id)
        .map(|t| t.label(LabelContext::Display).to_owned())
        .unwrap_or_else(|| "Notes".to_owned()),
      View::Search { .. } => "Search results".to_owned(),
      View::Progress => "Progress report".to_owned(),
    }
  }

  // ── Transitions ─────────────────────────────────────────────────────────

  fn go(&mut self, view: View) -> Outcome {
    self.view = view;
    Outcome::Moved
  }

  fn go_home(&mut self) {
    self.view = View::Home;
    self.query.clear();
  }

  fn open_subject(&mut self, catalog: &ContentCatalog, id: &str) -> Outcome {
    match catalog.find_subject(id) {
      Some(subject) => self.go(View::Chapters { subject_id: subject.id.clone() }),
      None => Outcome::Ignored,
    }
  }

  fn open_chapter(&mut self, catalog: &ContentCatalog, id: &str) -> Outcome {
    match catalog.find_chapter(id) {
      Some(chapter) => self.go(View::Topics {
        subject_id: chapter.subject_id.clone(),
        chapter_id: chapter.id.clone(),
      }),
      None => Outcome::Ignored,
    }
  }

  fn open_topic<R, C>(&mut self, progress: &mut ProgressStore<R, C>, id: &str) -> Outcome
  where
    R: ProgressRepository,
    C: Clock,
  {
    let Some(path) = progress.catalog().locate_topic(id) else {
      return Outcome::Ignored;
    };
    let view = View::Content {
      subject_id: path.subject.id.clone(),
      chapter_id: path.chapter.id.clone(),
      topic_id:   path.topic.id.clone(),
    };
    // The id was just located, so the touch cannot miss.
    let _ = progress.touch_last_read(id);
    self.go(view)
  }

  fn search(&mut self, catalog: &ContentCatalog, query: String) -> Outcome {
    if query.trim().is_empty() {
      self.query.clear();
      if matches!(self.view, View::Search { .. }) {
        self.go_home();
        return Outcome::Moved;
      }
      return Outcome::Updated;
    }

    let hits = search(catalog, &query).iter().map(|r| r.to_hit()).collect();
    self.query = query.clone();
    self.go(View::Search { query, hits })
  }

  fn back(&mut self, catalog: &ContentCatalog) -> Outcome {
    let previous = match &self.view {
      View::Home => return Outcome::Ignored,
      View::Subjects | View::Search { .. } | View::Progress => {
        self.go_home();
        return Outcome::Moved;
      }
      View::Chapters { .. } => View::Subjects,
      View::Topics { subject_id, .. } => View::Chapters { subject_id: subject_id.clone() },
      View::Content { subject_id, chapter_id, .. } => {
        if catalog.find_chapter(chapter_id).is_some() {
          View::Topics {
            subject_id: subject_id.clone(),
            chapter_id: chapter_id.clone(),
          }
        } else {
          self.go_home();
          return Outcome::Moved;
        }
      }
    };
    self.go(previous)
  }
}
