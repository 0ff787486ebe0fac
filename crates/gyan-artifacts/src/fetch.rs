//! Fetching artifact bytes.

use std::future::Future;

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::AcquisitionError;

/// Fetches the full body at a URL into memory.
pub trait ArtifactFetcher: Send + Sync {
  fn fetch<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = Result<Bytes, AcquisitionError>> + Send + 'a;
}

/// [`ArtifactFetcher`] over plain HTTP(S).
///
/// No request timeout is set; an acquisition runs until it completes or
/// fails.
#[derive(Clone, Default)]
pub struct HttpFetcher {
  client: Client,
}

impl HttpFetcher {
  pub fn new() -> Self { Self::default() }

  pub fn with_client(client: Client) -> Self { Self { client } }
}

impl ArtifactFetcher for HttpFetcher {
  fn fetch<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = Result<Bytes, AcquisitionError>> + Send + 'a {
    async move {
      let resp = self
        .client
        .get(url)
        .send()
        .await
        .map_err(AcquisitionError::network)?;

      let status = resp.status();
      if !status.is_success() {
        return Err(AcquisitionError::http(status.as_u16(), url));
      }

      let body = resp.bytes().await.map_err(AcquisitionError::network)?;
      debug!(url, len = body.len(), "fetched artifact");
      Ok(body)
    }
  }
}
