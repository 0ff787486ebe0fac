//! Conversions between repository values and the text stored in `kv.value`.
//!
//! Mappings are stored as compact JSON; the theme is stored as its bare
//! name so the value stays readable with the `sqlite3` shell.

use chrono::{DateTime, Utc};
use gyan_core::{
  preferences::Theme,
  store::{DownloadMap, ProgressMap},
};

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

// ─── Mappings ────────────────────────────────────────────────────────────────

pub fn encode_progress(records: &ProgressMap) -> Result<String> {
  Ok(serde_json::to_string(records)?)
}

pub fn decode_progress(s: &str) -> Result<ProgressMap> { Ok(serde_json::from_str(s)?) }

pub fn encode_downloads(records: &DownloadMap) -> Result<String> {
  Ok(serde_json::to_string(records)?)
}

pub fn decode_downloads(s: &str) -> Result<DownloadMap> { Ok(serde_json::from_str(s)?) }

// ─── Theme ───────────────────────────────────────────────────────────────────

pub fn encode_theme(theme: Theme) -> String { theme.to_string() }

pub fn decode_theme(s: &str) -> Result<Theme> {
  s.parse().map_err(|_| Error::UnknownTheme(s.to_owned()))
}
