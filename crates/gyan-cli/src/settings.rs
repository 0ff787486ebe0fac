//! Layered runtime settings.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML config file,
//! `GYAN_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Default storage bucket holding artifacts.
pub const DEFAULT_BUCKET: &str = "pdfs";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
  /// Holds `gyan.db` and `gyan.log`.
  pub data_dir:      Option<PathBuf>,
  /// JSON catalog replacing the built-in seed.
  pub catalog_path:  Option<PathBuf>,
  pub metadata_url:  Option<String>,
  #[serde(default)]
  pub api_key:       String,
  /// Defaults to `metadata_url`; both are usually the same host.
  pub storage_url:   Option<String>,
  pub bucket:        String,
  pub downloads_dir: Option<PathBuf>,
}

/// Values given on the command line; `None` leaves lower layers in effect.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub data_dir:      Option<PathBuf>,
  pub catalog_path:  Option<PathBuf>,
  pub metadata_url:  Option<String>,
  pub api_key:       Option<String>,
  pub storage_url:   Option<String>,
  pub bucket:        Option<String>,
  pub downloads_dir: Option<PathBuf>,
}

impl Settings {
  /// Load from `file` (optional on disk), the environment and `overrides`.
  pub fn load(file: &Path, overrides: Overrides) -> Result<Self> {
    Self::build(File::from(file).required(false), overrides)
  }

  /// Load from an in-memory TOML document instead of a file.
  pub fn from_toml(toml: &str, overrides: Overrides) -> Result<Self> {
    Self::build(File::from_str(toml, FileFormat::Toml), overrides)
  }

  fn build<S>(file: S, o: Overrides) -> Result<Self>
  where
    S: config::Source + Send + Sync + 'static,
  {
    let path = |p: Option<PathBuf>| p.map(|p| p.to_string_lossy().into_owned());

    Config::builder()
      .set_default("bucket", DEFAULT_BUCKET)?
      .add_source(file)
      .add_source(Environment::with_prefix("GYAN"))
      .set_override_option("data_dir", path(o.data_dir))?
      .set_override_option("catalog_path", path(o.catalog_path))?
      .set_override_option("metadata_url", o.metadata_url)?
      .set_override_option("api_key", o.api_key)?
      .set_override_option("storage_url", o.storage_url)?
      .set_override_option("bucket", o.bucket)?
      .set_override_option("downloads_dir", path(o.downloads_dir))?
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn data_dir(&self) -> PathBuf {
    match &self.data_dir {
      Some(dir) => expand_tilde(dir),
      None => home().join(".local/share/gyan"),
    }
  }

  pub fn downloads_dir(&self) -> PathBuf {
    match &self.downloads_dir {
      Some(dir) => expand_tilde(dir),
      None => home().join("Downloads"),
    }
  }

  pub fn catalog_path(&self) -> Option<PathBuf> { self.catalog_path.as_deref().map(expand_tilde) }

  pub fn storage_url(&self) -> Option<&str> {
    self.storage_url.as_deref().or(self.metadata_url.as_deref())
  }
}

/// The default config file location.
pub fn default_config_path() -> PathBuf { home().join(".config/gyan/config.toml") }

fn home() -> PathBuf { std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default() }

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(home) = std::env::var_os("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
