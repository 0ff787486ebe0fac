//! Unit tests for `gyan-core`, grouped by component.

mod catalog;
mod nav;
mod search;

use chrono::{DateTime, TimeZone, Utc};

use crate::{
  catalog::{Chapter, ContentCatalog, Subject, Topic},
  clock::ManualClock,
  memory::MemoryStore,
  progress::ProgressStore,
};

pub(super) const LONG_BODY: &str = "The directive principles are guidelines for \
  the framing of laws by the government, aiming at a welfare state in which \
  social and economic justice prevail for every citizen.";

/// Two subjects, three chapters, six topics.
pub(super) fn fixture_catalog() -> ContentCatalog {
  ContentCatalog::new(vec![
    Subject {
      id:           "civics".into(),
      display_name: "Civics".into(),
      icon:         "⚖️".into(),
      color_token:  "hsl(240, 70%, 60%)".into(),
      chapters:     vec![Chapter {
        id:           "civics-basics".into(),
        display_name: "Constitution Basics".into(),
        subject_id:   "civics".into(),
        topics:       vec![
          Topic::new(
            "topic-x",
            "Fundamental Rights",
            "civics-basics",
            "Part III guarantees equality and freedom.",
          )
          .with_localized_name("मौलिक अधिकार"),
          Topic::new("topic-y", "Preamble", "civics-basics", "We, the people of India."),
          Topic::new("topic-z", "Directive Principles", "civics-basics", LONG_BODY),
        ],
      }],
    },
    Subject {
      id:           "science".into(),
      display_name: "General Science".into(),
      icon:         "🔬".into(),
      color_token:  "hsl(180, 70%, 50%)".into(),
      chapters:     vec![
        Chapter {
          id:           "physics".into(),
          display_name: "Physics".into(),
          subject_id:   "science".into(),
          topics:       vec![
            Topic::new("light", "Light - reflection and refraction", "physics", "Mirrors and lenses."),
            Topic::new("electricity", "Electricity", "physics", "Ohm's law and circuits."),
          ],
        },
        Chapter {
          id:           "biology".into(),
          display_name: "Biology".into(),
          subject_id:   "science".into(),
          topics:       vec![Topic::new(
            "life-processes",
            "Life processes",
            "biology",
            "Nutrition, respiration and transport.",
          )],
        },
      ],
    },
  ])
  .expect("fixture catalog is valid")
}

pub(super) fn t0() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

pub(super) fn progress_store(
  repo: MemoryStore,
) -> (ProgressStore<MemoryStore, ManualClock>, ManualClock) {
  let clock = ManualClock::new(t0());
  let store = ProgressStore::load_with_clock(fixture_catalog(), repo, clock.clone());
  (store, clock)
}
