//! Remote artifact metadata and topic → artifact resolution.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Topic;

// ─── Metadata record ─────────────────────────────────────────────────────────

/// One artifact as registered with the remote metadata service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
  #[serde(default)]
  pub id:         Option<String>,
  #[serde(default)]
  pub subject_id: String,
  #[serde(default)]
  pub chapter_id: String,
  /// Preferred join key to a [`Topic`].
  #[serde(default)]
  pub topic_id:   Option<String>,
  /// Fallback join key, compared case-insensitively to the topic name.
  #[serde(default)]
  pub title:      String,
  /// Short summary of the document.
  #[serde(default)]
  pub content:    Option<String>,
  /// Bucket-relative storage path, `{subject_id}/{generated_file_name}`.
  #[serde(default)]
  pub file_path:  String,
  #[serde(default)]
  pub user_id:    Option<String>,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
}

/// A resolved reference to an artifact in remote storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
  /// Bucket-relative storage path.
  pub path:  String,
  pub title: String,
}

impl ArtifactRef {
  /// The last path segment, or `<title>.pdf` if the path has none.
  pub fn suggested_file_name(&self) -> String {
    match self.path.rsplit('/').next() {
      Some(name) if !name.is_empty() => name.to_owned(),
      _ => format!("{}.pdf", self.title),
    }
  }
}

impl From<&ArtifactMeta> for ArtifactRef {
  fn from(meta: &ArtifactMeta) -> Self {
    Self { path: meta.file_path.clone(), title: meta.title.clone() }
  }
}

// ─── Service trait ───────────────────────────────────────────────────────────

/// The remote service that lists registered artifacts.
pub trait MetadataService: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every artifact record, in the service's order.
  fn list_artifacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ArtifactMeta>, Self::Error>> + Send + '_;
}

// ─── Locator ─────────────────────────────────────────────────────────────────

/// Resolves topics to artifacts through a [`MetadataService`].
pub struct ArtifactLocator<M> {
  service: M,
}

impl<M: MetadataService> ArtifactLocator<M> {
  pub fn new(service: M) -> Self { Self { service } }

  /// Find the artifact for `topic`, if any.
  ///
  /// A service failure is logged and treated the same as "no artifact"; the
  /// topic's seeded artifact path, when present, is used in both cases.
  pub async fn resolve(&self, topic: &Topic) -> Option<ArtifactRef> {
    let records = match self.service.list_artifacts().await {
      Ok(records) => records,
      Err(e) => {
        warn!(topic_id = %topic.id, error = %e, "artifact metadata lookup failed");
        Vec::new()
      }
    };

    match select(&records, topic) {
      Some(meta) if !meta.file_path.is_empty() => return Some(ArtifactRef::from(meta)),
      Some(meta) => {
        debug!(topic_id = %topic.id, title = %meta.title, "matched record has no storage path")
      }
      None => {}
    }

    let seeded = topic.artifact_path.as_ref().map(|path| ArtifactRef {
      path:  path.clone(),
      title: topic.display_name.clone(),
    });
    if seeded.is_none() {
      debug!(topic_id = %topic.id, "no artifact for topic");
    }
    seeded
  }
}

/// Pick the record for `topic`: the first whose `topic_id` matches, else the
/// first whose title equals the display name ignoring case.
///
/// The title match is a heuristic and can bind two same-named topics to the
/// same artifact. The chosen record may still lack a storage path.
pub fn select<'a>(records: &'a [ArtifactMeta], topic: &Topic) -> Option<&'a ArtifactMeta> {
  records
    .iter()
    .find(|m| m.topic_id.as_deref() == Some(topic.id.as_str()))
    .or_else(|| {
      let name = topic.display_name.to_lowercase();
      records.iter().find(|m| m.title.to_lowercase() == name)
    })
}
