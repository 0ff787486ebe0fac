//! Repository traits for the durable local state.
//!
//! Each repository owns exactly one namespaced key in the host's key/value
//! store, so clearing one never disturbs the others. Every save writes the
//! whole mapping; there are no partial-key transactions.
//!
//! Implemented by storage backends (e.g. `gyan-store-sqlite`, or
//! [`crate::memory::MemoryStore`] for tests and ephemeral sessions).

use std::collections::BTreeMap;

use crate::{
  download::DownloadRecord,
  preferences::Theme,
  progress::ProgressRecord,
};

/// Key holding the serialised [`ProgressMap`].
pub const PROGRESS_KEY: &str = "gyan.progress";
/// Key holding the serialised [`DownloadMap`].
pub const DOWNLOADS_KEY: &str = "gyan.downloads";
/// Key holding the theme preference as a bare string.
pub const THEME_KEY: &str = "gyan.theme";

/// Progress records keyed by topic id.
pub type ProgressMap = BTreeMap<String, ProgressRecord>;

/// Download records keyed by topic id.
pub type DownloadMap = BTreeMap<String, DownloadRecord>;

/// Durable storage for per-topic progress.
pub trait ProgressRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the full mapping. A missing key yields an empty mapping; malformed
  /// data yields an error.
  fn load_progress(&self) -> Result<ProgressMap, Self::Error>;

  /// Replace the full mapping.
  fn save_progress(&self, records: &ProgressMap) -> Result<(), Self::Error>;
}

/// Durable storage for "artifact available offline" markers.
pub trait DownloadRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn load_downloads(&self) -> Result<DownloadMap, Self::Error>;

  fn save_downloads(&self, records: &DownloadMap) -> Result<(), Self::Error>;
}

/// Durable storage for UI preferences.
pub trait PreferenceRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// `None` when no preference has been stored yet.
  fn load_theme(&self) -> Result<Option<Theme>, Self::Error>;

  fn save_theme(&self, theme: Theme) -> Result<(), Self::Error>;
}
