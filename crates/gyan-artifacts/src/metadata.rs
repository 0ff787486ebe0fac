//! HTTP client for the remote artifact metadata service.

use std::{future::Future, time::Duration};

use gyan_core::artifact::{ArtifactMeta, MetadataService};
use reqwest::Client;
use tracing::debug;

use crate::error::ResolutionError;

/// Request timeout used by [`MetadataConfig::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the metadata service.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
  pub base_url: String,
  /// Sent both as the `apikey` header and as a bearer token.
  pub api_key:  String,
  /// Upper bound on a whole listing request, connect through body.
  pub timeout:  Duration,
}

impl MetadataConfig {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), api_key: api_key.into(), timeout: DEFAULT_TIMEOUT }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

/// Lists artifact records from the metadata service's REST endpoint.
///
/// Clones share the inner [`reqwest::Client`].
#[derive(Clone)]
pub struct RemoteMetadata {
  client: Client,
  config: MetadataConfig,
}

impl RemoteMetadata {
  pub fn new(config: MetadataConfig) -> Result<Self, ResolutionError> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(ResolutionError::Client)?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/rest/v1{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET /rest/v1/notes?select=*&order=created_at.desc`
  pub async fn list_notes(&self) -> Result<Vec<ArtifactMeta>, ResolutionError> {
    let resp = self
      .client
      .get(self.url("/notes"))
      .query(&[("select", "*"), ("order", "created_at.desc")])
      .header("apikey", &self.config.api_key)
      .bearer_auth(&self.config.api_key)
      .send()
      .await
      .map_err(ResolutionError::Request)?;

    if !resp.status().is_success() {
      return Err(ResolutionError::Status(resp.status().as_u16()));
    }
    let notes: Vec<ArtifactMeta> = resp.json().await.map_err(ResolutionError::Decode)?;
    debug!(count = notes.len(), "listed artifact metadata");
    Ok(notes)
  }
}

impl MetadataService for RemoteMetadata {
  type Error = ResolutionError;

  fn list_artifacts(
    &self,
  ) -> impl Future<Output = Result<Vec<ArtifactMeta>, ResolutionError>> + Send + '_ {
    self.list_notes()
  }
}
