use crate::{
  Error,
  catalog::{Chapter, ContentCatalog, LabelContext, Subject, Topic, TopicKind},
  seed::seed_catalog,
};

use super::fixture_catalog;

#[test]
fn lookups_find_each_level() {
  let catalog = fixture_catalog();

  assert_eq!(catalog.list_subjects().len(), 2);
  assert_eq!(catalog.find_subject("science").unwrap().display_name, "General Science");
  assert_eq!(catalog.find_chapter("biology").unwrap().subject_id, "science");
  assert_eq!(catalog.find_topic("electricity").unwrap().chapter_id, "physics");
}

#[test]
fn lookups_return_none_when_absent() {
  let catalog = fixture_catalog();

  assert!(catalog.find_subject("history").is_none());
  assert!(catalog.find_chapter("chemistry").is_none());
  assert!(catalog.find_topic("topic-missing").is_none());
  assert!(catalog.locate_topic("topic-missing").is_none());
}

#[test]
fn locate_topic_returns_parents() {
  let catalog = fixture_catalog();
  let path = catalog.locate_topic("life-processes").unwrap();

  assert_eq!(path.subject.id, "science");
  assert_eq!(path.chapter.id, "biology");
  assert_eq!(path.topic.display_name, "Life processes");
}

#[test]
fn traversal_is_subject_then_chapter_then_topic() {
  let catalog = fixture_catalog();
  let ids: Vec<&str> = catalog.topics().map(|p| p.topic.id.as_str()).collect();

  assert_eq!(ids, [
    "topic-x",
    "topic-y",
    "topic-z",
    "light",
    "electricity",
    "life-processes"
  ]);
  assert_eq!(catalog.topic_count(), 6);
}

#[test]
fn duplicate_topic_ids_are_rejected() {
  let chapter = Chapter {
    id:           "c".into(),
    display_name: "C".into(),
    subject_id:   "s".into(),
    topics:       vec![Topic::new("t", "T", "c", ""), Topic::new("t", "T2", "c", "")],
  };
  let result = ContentCatalog::new(vec![Subject {
    id:           "s".into(),
    display_name: "S".into(),
    icon:         String::new(),
    color_token:  String::new(),
    chapters:     vec![chapter],
  }]);

  assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}

#[test]
fn mismatched_back_reference_is_rejected() {
  let result = ContentCatalog::new(vec![Subject {
    id:           "s".into(),
    display_name: "S".into(),
    icon:         String::new(),
    color_token:  String::new(),
    chapters:     vec![Chapter {
      id:           "c".into(),
      display_name: "C".into(),
      subject_id:   "other".into(),
      topics:       Vec::new(),
    }],
  }]);

  assert!(matches!(result, Err(Error::InvalidCatalog(_))));
}

#[test]
fn catalog_parses_from_json_with_defaults() {
  let raw = r#"[{
    "id": "maths",
    "display_name": "Elementary Arithmetic",
    "chapters": [{
      "id": "arith",
      "display_name": "Arithmetic",
      "subject_id": "maths",
      "topics": [
        { "id": "ratio", "display_name": "Ratio", "chapter_id": "arith" },
        { "id": "pct", "display_name": "Percentage", "chapter_id": "arith",
          "kind": "pdf", "artifact_path": "maths/1700000000000_pct.pdf" }
      ]
    }]
  }]"#;

  let catalog = ContentCatalog::from_json(raw).unwrap();
  let ratio = catalog.find_topic("ratio").unwrap();
  assert_eq!(ratio.kind, TopicKind::Text);
  assert!(!ratio.is_completed);
  assert!(ratio.last_read_at.is_none());

  let pct = catalog.find_topic("pct").unwrap();
  assert_eq!(pct.kind, TopicKind::Artifact);
  assert_eq!(pct.artifact_path.as_deref(), Some("maths/1700000000000_pct.pdf"));
}

#[test]
fn catalog_file_cannot_preset_progress() {
  let raw = r#"[{
    "id": "maths",
    "display_name": "Elementary Arithmetic",
    "chapters": [{
      "id": "arith",
      "display_name": "Arithmetic",
      "subject_id": "maths",
      "topics": [
        { "id": "ratio", "display_name": "Ratio", "chapter_id": "arith",
          "is_completed": true, "last_read_at": "2026-03-01T09:00:00Z" }
      ]
    }]
  }]"#;

  let catalog = ContentCatalog::from_json(raw).unwrap();
  let ratio = catalog.find_topic("ratio").unwrap();
  assert!(!ratio.is_completed);
  assert!(ratio.last_read_at.is_none());
}

#[test]
fn malformed_json_is_a_serialization_error() {
  assert!(matches!(
    ContentCatalog::from_json("{not json"),
    Err(Error::Serialization(_))
  ));
}

#[test]
fn label_prefers_localized_name_only_when_browsing() {
  let catalog = fixture_catalog();
  let topic = catalog.find_topic("topic-x").unwrap();

  assert_eq!(topic.label(LabelContext::Display), "मौलिक अधिकार");
  assert_eq!(topic.label(LabelContext::Search), "Fundamental Rights");
  assert_eq!(topic.label(LabelContext::Admin), "Fundamental Rights");

  let plain = catalog.find_topic("topic-y").unwrap();
  assert_eq!(plain.label(LabelContext::Display), "Preamble");
}

#[test]
fn topic_kind_parses_legacy_name() {
  assert_eq!("pdf".parse::<TopicKind>().unwrap(), TopicKind::Artifact);
  assert_eq!(TopicKind::Artifact.to_string(), "artifact");
}

#[test]
fn seed_catalog_is_valid_and_starts_unread() {
  let catalog = seed_catalog().unwrap();

  assert_eq!(catalog.list_subjects().len(), 12);
  assert!(catalog.find_topic("indus-valley").is_some());
  assert!(
    catalog
      .topics()
      .all(|p| !p.topic.is_completed && p.topic.last_read_at.is_none())
  );
}
