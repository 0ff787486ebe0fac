use chrono::Duration;

use crate::{
  memory::MemoryStore,
  nav::{Action, NavigationController, Outcome, View},
};

use super::{progress_store, t0};

#[test]
fn starts_at_home() {
  let nav = NavigationController::new();
  assert_eq!(nav.view(), &View::Home);
  assert_eq!(nav.query(), "");
}

#[test]
fn drill_down_and_back_up() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  nav.dispatch(Action::Subjects, &mut progress);
  nav.dispatch(Action::OpenSubject("science".into()), &mut progress);
  assert_eq!(nav.view(), &View::Chapters { subject_id: "science".into() });

  nav.dispatch(Action::OpenChapter("physics".into()), &mut progress);
  assert_eq!(nav.view(), &View::Topics {
    subject_id: "science".into(),
    chapter_id: "physics".into(),
  });

  nav.dispatch(Action::OpenTopic("electricity".into()), &mut progress);
  assert!(matches!(nav.view(), View::Content { topic_id, .. } if topic_id == "electricity"));

  nav.dispatch(Action::Back, &mut progress);
  assert!(matches!(nav.view(), View::Topics { chapter_id, .. } if chapter_id == "physics"));
  nav.dispatch(Action::Back, &mut progress);
  assert!(matches!(nav.view(), View::Chapters { subject_id } if subject_id == "science"));
  nav.dispatch(Action::Back, &mut progress);
  assert_eq!(nav.view(), &View::Subjects);
  nav.dispatch(Action::Back, &mut progress);
  assert_eq!(nav.view(), &View::Home);
  assert_eq!(nav.dispatch(Action::Back, &mut progress), Outcome::Ignored);
}

#[test]
fn opening_a_topic_touches_last_read() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  nav.dispatch(Action::OpenTopic("topic-y".into()), &mut progress);

  let topic = progress.catalog().find_topic("topic-y").unwrap();
  assert_eq!(topic.last_read_at, Some(t0()));
  assert!(!topic.is_completed);
}

#[test]
fn unknown_ids_are_ignored() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  assert_eq!(
    nav.dispatch(Action::OpenSubject("nope".into()), &mut progress),
    Outcome::Ignored
  );
  assert_eq!(
    nav.dispatch(Action::OpenChapter("nope".into()), &mut progress),
    Outcome::Ignored
  );
  assert_eq!(
    nav.dispatch(Action::OpenTopic("nope".into()), &mut progress),
    Outcome::Ignored
  );
  assert_eq!(nav.view(), &View::Home);
}

#[test]
fn toggle_only_applies_in_content_view() {
  let (mut progress, clock) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  assert_eq!(nav.dispatch(Action::ToggleCompleted, &mut progress), Outcome::Ignored);

  nav.dispatch(Action::OpenTopic("topic-x".into()), &mut progress);
  clock.advance(Duration::seconds(2));
  assert_eq!(nav.dispatch(Action::ToggleCompleted, &mut progress), Outcome::Updated);

  let topic = progress.catalog().find_topic("topic-x").unwrap();
  assert!(topic.is_completed);
  assert_eq!(topic.last_read_at, Some(t0() + Duration::seconds(2)));
}

#[test]
fn search_shows_hits_and_blank_query_goes_home() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  nav.dispatch(Action::Search("rights".into()), &mut progress);
  match nav.view() {
    View::Search { query, hits } => {
      assert_eq!(query, "rights");
      assert_eq!(hits.len(), 1);
      assert_eq!(hits[0].topic_id, "topic-x");
    }
    other => panic!("expected search view, got {other:?}"),
  }
  assert_eq!(nav.query(), "rights");

  nav.dispatch(Action::Search("  ".into()), &mut progress);
  assert_eq!(nav.view(), &View::Home);
  assert_eq!(nav.query(), "");
}

#[test]
fn blank_search_outside_search_view_stays_put() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();
  nav.dispatch(Action::Progress, &mut progress);

  nav.dispatch(Action::Search(String::new()), &mut progress);

  assert_eq!(nav.view(), &View::Progress);
}

#[test]
fn content_opened_from_search_goes_back_to_its_chapter() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  nav.dispatch(Action::Search("life".into()), &mut progress);
  nav.dispatch(Action::OpenTopic("life-processes".into()), &mut progress);
  nav.dispatch(Action::Back, &mut progress);

  assert_eq!(nav.view(), &View::Topics {
    subject_id: "science".into(),
    chapter_id: "biology".into(),
  });
}

#[test]
fn home_clears_the_query() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  nav.dispatch(Action::Search("preamble".into()), &mut progress);
  nav.dispatch(Action::Home, &mut progress);

  assert_eq!(nav.query(), "");
  assert_eq!(nav.view(), &View::Home);
}

#[test]
fn titles_follow_the_view() {
  let (mut progress, _) = progress_store(MemoryStore::new());
  let mut nav = NavigationController::new();

  assert_eq!(nav.title(progress.catalog()), "Gyan");
  nav.dispatch(Action::OpenSubject("civics".into()), &mut progress);
  assert_eq!(nav.title(progress.catalog()), "Civics");
  nav.dispatch(Action::OpenChapter("civics-basics".into()), &mut progress);
  assert_eq!(nav.title(progress.catalog()), "Constitution Basics");
  nav.dispatch(Action::OpenTopic("topic-x".into()), &mut progress);
  assert_eq!(nav.title(progress.catalog()), "मौलिक अधिकार");
}
