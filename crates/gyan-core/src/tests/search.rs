use crate::search::{ELLIPSIS, EXCERPT_CHARS, MatchField, excerpt, search};

use super::{LONG_BODY, fixture_catalog};

#[test]
fn blank_queries_return_nothing() {
  let catalog = fixture_catalog();

  assert!(search(&catalog, "").is_empty());
  assert!(search(&catalog, "   \t").is_empty());
}

#[test]
fn name_match_uses_full_display_name() {
  let catalog = fixture_catalog();
  let results = search(&catalog, "fundamental");

  assert_eq!(results.len(), 1);
  let hit = &results[0];
  assert_eq!(hit.topic.id, "topic-x");
  assert_eq!(hit.chapter.id, "civics-basics");
  assert_eq!(hit.subject.id, "civics");
  assert_eq!(hit.matched_on, MatchField::DisplayName);
  assert_eq!(hit.matched_excerpt, "Fundamental Rights");
}

#[test]
fn matching_ignores_case() {
  let catalog = fixture_catalog();

  let results = search(&catalog, "ELECTRICITY");
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].matched_excerpt, "Electricity");
}

#[test]
fn body_match_uses_truncated_excerpt() {
  let catalog = fixture_catalog();
  let results = search(&catalog, "welfare state");

  assert_eq!(results.len(), 1);
  let hit = &results[0];
  assert_eq!(hit.topic.id, "topic-z");
  assert_eq!(hit.matched_on, MatchField::BodyText);

  let expected: String = LONG_BODY.chars().take(EXCERPT_CHARS).collect::<String>() + ELLIPSIS;
  assert_eq!(hit.matched_excerpt, expected);
}

#[test]
fn short_bodies_still_get_an_ellipsis() {
  let catalog = fixture_catalog();
  let results = search(&catalog, "we, the people");

  assert_eq!(results.len(), 1);
  assert_eq!(results[0].matched_excerpt, "We, the people of India....");
}

#[test]
fn name_match_wins_over_body_match() {
  let catalog = fixture_catalog();
  // "light" appears in the display name of one topic only.
  let results = search(&catalog, "light");

  assert_eq!(results.len(), 1);
  assert_eq!(results[0].matched_on, MatchField::DisplayName);
}

#[test]
fn results_follow_catalog_order() {
  let catalog = fixture_catalog();
  // Matches body text in civics and names/bodies in science.
  let results = search(&catalog, "i");
  let ids: Vec<&str> = results.iter().map(|r| r.topic.id.as_str()).collect();

  let order: Vec<&str> = catalog.topics().map(|p| p.topic.id.as_str()).collect();
  let mut sorted = ids.clone();
  sorted.sort_by_key(|id| order.iter().position(|o| o == id));
  assert_eq!(ids, sorted);
  assert!(ids.len() > 2);
}

#[test]
fn excerpt_counts_characters_not_bytes() {
  let body = "अ".repeat(150);
  let out = excerpt(&body);

  assert_eq!(out.chars().count(), EXCERPT_CHARS + ELLIPSIS.len());
  assert!(out.ends_with(ELLIPSIS));
}

#[test]
fn hits_detach_from_the_catalog() {
  let catalog = fixture_catalog();
  let hit = search(&catalog, "preamble")[0].to_hit();

  assert_eq!(hit.topic_id, "topic-y");
  assert_eq!(hit.chapter_id, "civics-basics");
  assert_eq!(hit.subject_id, "civics");
}
