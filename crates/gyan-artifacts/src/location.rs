//! Addressing of artifacts in remote object storage.

use chrono::{DateTime, Utc};

/// A public bucket on the storage server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
  pub base_url: String,
  pub bucket:   String,
}

impl StorageLocation {
  pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), bucket: bucket.into() }
  }

  /// The publicly fetchable URL of a bucket-relative `path`.
  pub fn public_url(&self, path: &str) -> String {
    format!(
      "{}/storage/v1/object/public/{}/{}",
      self.base_url.trim_end_matches('/'),
      self.bucket,
      path.trim_start_matches('/'),
    )
  }
}

/// Bucket-relative object paths, `{subject_id}/{generated_file_name}`.
pub struct ObjectPath;

impl ObjectPath {
  /// A collision-resistant path for an upload of `original_name` at `at`.
  ///
  /// The generated name is the upload time in milliseconds, an underscore,
  /// then the original name with anything outside `[A-Za-z0-9._-]` replaced.
  pub fn generate(subject_id: &str, original_name: &str, at: DateTime<Utc>) -> String {
    format!("{subject_id}/{}_{}", at.timestamp_millis(), sanitize(original_name))
  }
}

fn sanitize(name: &str) -> String {
  let cleaned: String = name
    .chars()
    .map(|c| match c {
      'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
      _ => '_',
    })
    .collect();
  if cleaned.is_empty() { "artifact".to_owned() } else { cleaned }
}
