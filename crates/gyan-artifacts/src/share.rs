//! Host capabilities for opening and sharing artifact URLs.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{OpenError, ShareError};

/// A native share sheet.
#[async_trait]
pub trait ShareSheet: Send + Sync {
  async fn share(&self, title: &str, text: &str, url: &str) -> Result<(), ShareError>;
}

/// Copies text to the system clipboard. The last resort for sharing.
pub trait Clipboard: Send + Sync {
  fn copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Opens a URL with the host's default handler.
pub trait UrlOpener: Send + Sync {
  fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// [`UrlOpener`] backed by the desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
  fn open(&self, url: &str) -> Result<(), OpenError> {
    debug!(url, "opening in system handler");
    open::that(url).map_err(|source| OpenError { url: url.to_owned(), source })
  }
}

/// How a share request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
  Shared,
  /// No share sheet worked; the URL is on the clipboard instead. The caller
  /// should tell the user.
  CopiedToClipboard,
}
