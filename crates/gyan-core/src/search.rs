//! Free-text search over the catalog.
//!
//! A full rescan per query: case-insensitive substring matching against each
//! topic's display name, then its body text. Results come back in catalog
//! traversal order with no ranking.

use serde::{Deserialize, Serialize};

use crate::catalog::{Chapter, ContentCatalog, Subject, Topic};

/// Number of body characters kept in a body-text excerpt.
pub const EXCERPT_CHARS: usize = 100;

/// Appended to every body-text excerpt.
pub const ELLIPSIS: &str = "...";

/// Which field of the topic matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
  DisplayName,
  BodyText,
}

/// A topic matched by a query, with its context.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
  pub topic:           &'a Topic,
  pub chapter:         &'a Chapter,
  pub subject:         &'a Subject,
  pub matched_on:      MatchField,
  pub matched_excerpt: String,
}

impl SearchResult<'_> {
  /// Detach from the catalog borrow.
  pub fn to_hit(&self) -> SearchHit {
    SearchHit {
      topic_id:        self.topic.id.clone(),
      chapter_id:      self.chapter.id.clone(),
      subject_id:      self.subject.id.clone(),
      matched_on:      self.matched_on,
      matched_excerpt: self.matched_excerpt.clone(),
    }
  }
}

/// An owned search result, referring to catalog entries by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
  pub topic_id:        String,
  pub chapter_id:      String,
  pub subject_id:      String,
  pub matched_on:      MatchField,
  pub matched_excerpt: String,
}

/// Search every topic in `catalog` for `query`.
///
/// A blank query returns nothing. The query is only lowercased, not trimmed,
/// so surrounding whitespace takes part in the match.
pub fn search<'a>(catalog: &'a ContentCatalog, query: &str) -> Vec<SearchResult<'a>> {
  if query.trim().is_empty() {
    return Vec::new();
  }
  let needle = query.to_lowercase();

  catalog
    .topics()
    .filter_map(|path| {
      let (matched_on, matched_excerpt) =
        if path.topic.display_name.to_lowercase().contains(&needle) {
          (MatchField::DisplayName, path.topic.display_name.clone())
        } else if path.topic.body_text.to_lowercase().contains(&needle) {
          (MatchField::BodyText, excerpt(&path.topic.body_text))
        } else {
          return None;
        };

      Some(SearchResult {
        topic: path.topic,
        chapter: path.chapter,
        subject: path.subject,
        matched_on,
        matched_excerpt,
      })
    })
    .collect()
}

/// The first [`EXCERPT_CHARS`] characters of `body` plus [`ELLIPSIS`].
pub fn excerpt(body: &str) -> String {
  let mut out: String = body.chars().take(EXCERPT_CHARS).collect();
  out.push_str(ELLIPSIS);
  out
}
