//! Integration tests for the plan store and its JSON file

use diploma_planner::core::models::{PlanningState, Track};
use diploma_planner::core::store::{load_state, save_state};
use diploma_planner::core::{Catalog, Destination, PlannerError, PlanStore, Rejection};
use std::fs;
use tempfile::TempDir;

fn temp_plan() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("plans").join("plan.json");
    (dir, path)
}

#[test]
fn missing_file_starts_with_four_empty_terms() {
    let (_dir, path) = temp_plan();
    let state = load_state(&path);

    assert_eq!(state, PlanningState::default());
    assert_eq!(state.terms.len(), 4);
    assert_eq!(state.terms[3].name, "Term 4");
    assert_eq!(state.selected_track, Track::Both);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let (_dir, path) = temp_plan();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");

    fs::write(&path, "{ not json").expect("write");
    assert_eq!(load_state(&path), PlanningState::default());

    fs::write(&path, r#"{"terms": "nope", "completedCourses": []}"#).expect("write");
    assert_eq!(load_state(&path), PlanningState::default());
}

#[test]
fn mutations_are_persisted_immediately() {
    let (_dir, path) = temp_plan();
    let catalog = Catalog::embedded();

    {
        let mut store = PlanStore::open(&catalog, &path);
        store.set_track(Track::Programming).expect("track");
        store.mark_completed("mad1").expect("complete");
        let decision = store.move_course("mad2", Destination::Term(1)).expect("move");
        assert!(decision.can_add());
    }

    let reopened = PlanStore::open(&catalog, &path);
    let state = reopened.state();
    assert_eq!(state.selected_track, Track::Programming);
    assert_eq!(state.completed_courses, vec!["mad1"]);
    assert_eq!(state.term_of("mad2"), Some(1));

    let raw = fs::read_to_string(&path).expect("read");
    assert!(raw.contains("\"completedCourses\""));
    assert!(raw.contains("\"selectedTrack\": \"programming\""));
}

#[test]
fn save_and_load_round_trip() {
    let (_dir, path) = temp_plan();
    let mut state = PlanningState::default();
    state.selected_track = Track::DataScienceBa;
    state.terms[2].add_course("bdm".to_string());
    state.completed_courses.push("mlf".to_string());

    save_state(&state, &path).expect("save");
    assert_eq!(load_state(&path), state);
}

#[test]
fn prerequisite_must_sit_in_an_earlier_term() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    store.move_course("mlf", Destination::Term(2)).expect("mlf");

    let same_or_earlier = store.move_course("mlt", Destination::Term(1)).expect("mlt");
    assert_eq!(
        same_or_earlier.reason().as_deref(),
        Some("Requires BSCS2004 to be completed first")
    );

    let later = store.move_course("mlt", Destination::Term(3)).expect("mlt");
    assert!(later.can_add());
}

#[test]
fn completed_courses_cannot_be_placed() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    store.move_course("dbms", Destination::Term(1)).expect("move");
    assert!(store.mark_completed("dbms").expect("complete"));
    assert_eq!(store.state().term_of("dbms"), None);
    assert!(!store.mark_completed("dbms").expect("again"));

    let decision = store.move_course("dbms", Destination::Term(2)).expect("move");
    assert_eq!(decision.rejection(), Some(&Rejection::AlreadyCompleted));

    assert!(store.unmark_completed("dbms").expect("uncomplete"));
    assert!(!store.unmark_completed("dbms").expect("uncomplete again"));
    assert!(store.move_course("dbms", Destination::Term(2)).expect("move").can_add());
}

#[test]
fn moving_within_the_same_term_is_a_duplicate() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    store.move_course("pdsa", Destination::Term(1)).expect("move");
    let decision = store.move_course("pdsa", Destination::Term(1)).expect("move");
    assert_eq!(decision.reason().as_deref(), Some("Already in this term"));
    assert_eq!(store.state().terms[0].courses, vec!["pdsa"]);
}

#[test]
fn adding_and_removing_terms() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    let id = store.add_term().expect("add");
    assert_eq!(id, 5);
    assert_eq!(store.state().terms[4].name, "Term 5");

    store.move_course("java", Destination::Term(2)).expect("move");
    let removed = store.remove_term(2).expect("remove");
    assert_eq!(removed.courses, vec!["java"]);
    assert_eq!(store.state().term_of("java"), None);

    let names: Vec<&str> = store.state().terms.iter().map(|t| t.name.as_str()).collect();
    let term_ids: Vec<u32> = store.state().terms.iter().map(|t| t.id).collect();
    assert_eq!(names, vec!["Term 1", "Term 2", "Term 3", "Term 4"]);
    assert_eq!(term_ids, vec![1, 3, 4, 5]);

    assert_eq!(store.add_term().expect("add"), 6);
}

#[test]
fn last_term_cannot_be_removed() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    for id in [1, 2, 3] {
        store.remove_term(id).expect("remove");
    }
    assert!(matches!(store.remove_term(4), Err(PlannerError::LastTerm)));
    assert_eq!(store.state().terms.len(), 1);
}

#[test]
fn missing_term_in_single_term_plan_is_unknown() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    for id in [1, 2, 3] {
        store.remove_term(id).expect("remove");
    }
    assert!(matches!(
        store.remove_term(9),
        Err(PlannerError::UnknownTerm { id: 9 })
    ));
    assert_eq!(store.state().terms.len(), 1);
}

#[test]
fn unknown_term_is_an_error() {
    let catalog = Catalog::embedded();
    let mut store = PlanStore::new(&catalog, PlanningState::default());

    assert!(matches!(
        store.remove_term(42),
        Err(PlannerError::UnknownTerm { id: 42 })
    ));
}

#[test]
fn reset_restores_defaults_on_disk() {
    let (_dir, path) = temp_plan();
    let catalog = Catalog::embedded();

    let mut store = PlanStore::open(&catalog, &path);
    store.add_term().expect("add");
    store.mark_completed("sc").expect("complete");
    store.reset().expect("reset");

    assert_eq!(store.state(), &PlanningState::default());
    assert_eq!(load_state(&path), PlanningState::default());
}
