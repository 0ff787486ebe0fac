//! Aggregate progress figures for the dashboard.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::catalog::ContentCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectProgress {
  pub subject_id:   String,
  pub display_name: String,
  pub icon:         String,
  pub total:        usize,
  pub completed:    usize,
}

impl SubjectProgress {
  pub fn percent(&self) -> u8 { percent(self.completed, self.total) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
  pub total_topics:     usize,
  pub completed_topics: usize,
  /// Topics whose last read falls on the same calendar day as `now`.
  pub read_today:       usize,
  pub subjects:         Vec<SubjectProgress>,
}

impl ProgressSummary {
  /// Summarise `catalog`, judging "today" in the time zone of `now`.
  pub fn compute<Tz: TimeZone>(catalog: &ContentCatalog, now: &DateTime<Tz>) -> Self {
    let today = now.date_naive();
    let tz = now.timezone();

    let subjects: Vec<SubjectProgress> = catalog
      .list_subjects()
      .iter()
      .map(|s| SubjectProgress {
        subject_id:   s.id.clone(),
        display_name: s.display_name.clone(),
        icon:         s.icon.clone(),
        total:        s.topics().count(),
        completed:    s.topics().filter(|t| t.is_completed).count(),
      })
      .collect();

    let read_today = catalog
      .topics()
      .filter_map(|p| p.topic.last_read_at)
      .filter(|at| at.with_timezone(&tz).date_naive() == today)
      .count();

    Self {
      total_topics: subjects.iter().map(|s| s.total).sum(),
      completed_topics: subjects.iter().map(|s| s.completed).sum(),
      read_today,
      subjects,
    }
  }

  pub fn percent(&self) -> u8 { percent(self.completed_topics, self.total_topics) }
}

/// Rounded percentage; zero when there is nothing to complete.
fn percent(done: usize, total: usize) -> u8 {
  if total == 0 {
    return 0;
  }
  ((done as f64 / total as f64) * 100.0).round() as u8
}
