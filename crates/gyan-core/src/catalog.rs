//! The content hierarchy: subjects own chapters, chapters own topics.
//!
//! A [`ContentCatalog`] is built once from seed data and never changes shape
//! afterwards. The only mutable fields are a topic's progress fields, and
//! those are written exclusively by [`crate::progress::ProgressStore`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Topic ───────────────────────────────────────────────────────────────────

/// Whether a topic's content is inline text or a remotely hosted document.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TopicKind {
  #[default]
  Text,
  /// Backed by an artifact (in practice a PDF).
  #[serde(alias = "pdf")]
  #[strum(to_string = "artifact", serialize = "pdf")]
  Artifact,
}

/// Where a topic label is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelContext {
  /// Browsing lists; prefers the localized name.
  Display,
  Search,
  Admin,
}

/// The leaf content unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
  pub id:             String,
  pub display_name:   String,
  /// Optional name in the reader's language, used only when browsing.
  #[serde(default)]
  pub localized_name: Option<String>,
  pub chapter_id:     String,
  #[serde(default)]
  pub body_text:      String,
  #[serde(default)]
  pub kind:           TopicKind,
  /// Bucket-relative artifact path, when known at seed time.
  #[serde(default)]
  pub artifact_path:  Option<String>,
  /// Progress fields start unset and are only ever written by the store.
  #[serde(skip_deserializing)]
  pub is_completed:   bool,
  #[serde(skip_deserializing)]
  pub last_read_at:   Option<DateTime<Utc>>,
  #[serde(default)]
  pub bookmarked:     bool,
  #[serde(default)]
  pub tags:           Vec<String>,
}

impl Topic {
  /// A text topic with seed defaults for every progress field.
  pub fn new(
    id: impl Into<String>,
    display_name: impl Into<String>,
    chapter_id: impl Into<String>,
    body_text: impl Into<String>,
  ) -> Self {
    Self {
      id:             id.into(),
      display_name:   display_name.into(),
      localized_name: None,
      chapter_id:     chapter_id.into(),
      body_text:      body_text.into(),
      kind:           TopicKind::Text,
      artifact_path:  None,
      is_completed:   false,
      last_read_at:   None,
      bookmarked:     false,
      tags:           Vec::new(),
    }
  }

  pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
    self.localized_name = Some(name.into());
    self
  }

  /// Mark the topic as artifact-backed, optionally with a known path.
  pub fn as_artifact(mut self, path: Option<String>) -> Self {
    self.kind = TopicKind::Artifact;
    self.artifact_path = path;
    self
  }

  /// The label to show for this topic in `ctx`.
  ///
  /// Search and admin surfaces always use the canonical display name so that
  /// what the user typed is what they see highlighted.
  pub fn label(&self, ctx: LabelContext) -> &str {
    match ctx {
      LabelContext::Display => self
        .localized_name
        .as_deref()
        .unwrap_or(&self.display_name),
      LabelContext::Search | LabelContext::Admin => &self.display_name,
    }
  }
}

// ─── Chapter / Subject ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
  pub id:           String,
  pub display_name: String,
  /// Lookup-only back-reference to the owning subject.
  pub subject_id:   String,
  #[serde(default)]
  pub topics:       Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
  pub id:           String,
  pub display_name: String,
  #[serde(default)]
  pub icon:         String,
  #[serde(default)]
  pub color_token:  String,
  #[serde(default)]
  pub chapters:     Vec<Chapter>,
}

impl Subject {
  pub fn topics(&self) -> impl Iterator<Item = &Topic> {
    self.chapters.iter().flat_map(|c| c.topics.iter())
  }
}

/// A topic together with the chapter and subject that contain it.
#[derive(Debug, Clone, Copy)]
pub struct TopicPath<'a> {
  pub subject: &'a Subject,
  pub chapter: &'a Chapter,
  pub topic:   &'a Topic,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The read-only subject → chapter → topic hierarchy, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
  subjects:      Vec<Subject>,
  subject_index: HashMap<String, usize>,
  chapter_index: HashMap<String, (usize, usize)>,
  topic_index:   HashMap<String, (usize, usize, usize)>,
}

impl ContentCatalog {
  /// Build and index a catalog.
  ///
  /// Ids must be unique per level and every back-reference must point at its
  /// actual parent.
  pub fn new(subjects: Vec<Subject>) -> Result<Self> {
    let mut subject_index = HashMap::new();
    let mut chapter_index = HashMap::new();
    let mut topic_index = HashMap::new();

    for (si, subject) in subjects.iter().enumerate() {
      if subject_index.insert(subject.id.clone(), si).is_some() {
        return Err(Error::InvalidCatalog(format!(
          "duplicate subject id {:?}",
          subject.id
        )));
      }
      for (ci, chapter) in subject.chapters.iter().enumerate() {
        if chapter.subject_id != subject.id {
          return Err(Error::InvalidCatalog(format!(
            "chapter {:?} points at subject {:?} but lives under {:?}",
            chapter.id, chapter.subject_id, subject.id
          )));
        }
        if chapter_index.insert(chapter.id.clone(), (si, ci)).is_some() {
          return Err(Error::InvalidCatalog(format!(
            "duplicate chapter id {:?}",
            chapter.id
          )));
        }
        for (ti, topic) in chapter.topics.iter().enumerate() {
          if topic.chapter_id != chapter.id {
            return Err(Error::InvalidCatalog(format!(
              "topic {:?} points at chapter {:?} but lives under {:?}",
              topic.id, topic.chapter_id, chapter.id
            )));
          }
          if topic_index.insert(topic.id.clone(), (si, ci, ti)).is_some() {
            return Err(Error::InvalidCatalog(format!(
              "duplicate topic id {:?}",
              topic.id
            )));
          }
        }
      }
    }

    Ok(Self { subjects, subject_index, chapter_index, topic_index })
  }

  /// Parse a catalog from its JSON form (an array of subjects).
  pub fn from_json(raw: &str) -> Result<Self> {
    let subjects: Vec<Subject> = serde_json::from_str(raw)?;
    Self::new(subjects)
  }

  pub fn list_subjects(&self) -> &[Subject] { &self.subjects }

  pub fn find_subject(&self, id: &str) -> Option<&Subject> {
    self.subject_index.get(id).map(|&si| &self.subjects[si])
  }

  pub fn find_chapter(&self, id: &str) -> Option<&Chapter> {
    self
      .chapter_index
      .get(id)
      .map(|&(si, ci)| &self.subjects[si].chapters[ci])
  }

  pub fn find_topic(&self, id: &str) -> Option<&Topic> {
    self.locate_topic(id).map(|p| p.topic)
  }

  /// Look up a topic along with its chapter and subject.
  pub fn locate_topic(&self, id: &str) -> Option<TopicPath<'_>> {
    let &(si, ci, ti) = self.topic_index.get(id)?;
    let subject = &self.subjects[si];
    let chapter = &subject.chapters[ci];
    Some(TopicPath { subject, chapter, topic: &chapter.topics[ti] })
  }

  /// Every topic in traversal order: subject, then chapter, then topic.
  pub fn topics(&self) -> impl Iterator<Item = TopicPath<'_>> {
    self.subjects.iter().flat_map(|subject| {
      subject.chapters.iter().flat_map(move |chapter| {
        chapter
          .topics
          .iter()
          .map(move |topic| TopicPath { subject, chapter, topic })
      })
    })
  }

  pub fn topic_count(&self) -> usize { self.topic_index.len() }

  pub(crate) fn topic_mut(&mut self, id: &str) -> Option<&mut Topic> {
    let &(si, ci, ti) = self.topic_index.get(id)?;
    Some(&mut self.subjects[si].chapters[ci].topics[ti])
  }
}
