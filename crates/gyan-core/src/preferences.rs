//! UI preferences (currently just the colour theme).

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::store::PreferenceRepository;

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
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }
}

pub struct Preferences<R> {
  theme: Theme,
  repo:  R,
}

impl<R: PreferenceRepository> Preferences<R> {
  /// Load stored preferences, falling back to defaults on any failure.
  pub fn load(repo: R) -> Self {
    let theme = match repo.load_theme() {
      Ok(theme) => theme.unwrap_or_default(),
      Err(e) => {
        warn!(error = %e, "theme preference unreadable; using default");
        Theme::default()
      }
    };
    Self { theme, repo }
  }

  pub fn theme(&self) -> Theme { self.theme }

  pub fn set_theme(&mut self, theme: Theme) {
    self.theme = theme;
    if let Err(e) = self.repo.save_theme(theme) {
      error!(error = %e, "failed to persist theme preference");
    }
  }

  pub fn toggle_theme(&mut self) -> Theme {
    self.set_theme(self.theme.toggled());
    self.theme
  }
}
