// Unit tests for Babyname Match

use babyname_match::core::{
    catalog::{normalize_batch, parse_import_text},
    judgment::{is_match, is_pending_superlike, is_queued, tally},
};
use babyname_match::models::{Judgment, NameId, Role, Stats, DISLIKES_BEFORE_REMOVED};
use chrono::Utc;

#[test]
fn test_removal_threshold() {
    assert_eq!(DISLIKES_BEFORE_REMOVED, 2);
}

#[test]
fn test_inverse_covers_both_roles() {
    assert_eq!(Role::Mom.inverse(), Role::Dad);
    assert_eq!(Role::Dad.inverse(), Role::Mom);
}

#[test]
fn test_name_id_is_case_and_space_insensitive() {
    assert_eq!(NameId::from_text("Mary Kate"), NameId::from_text("mary   KATE"));
    assert_ne!(NameId::from_text("Marykate"), NameId::from_text("Mary Kate"));
}

#[test]
fn test_import_text_to_catalog() {
    let lines = parse_import_text("Emma\r\nemma\r\n\r\nNoah\n  Ava  ");
    let batch = normalize_batch(&lines);
    let ids: Vec<&str> = batch.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["ava", "emma", "noah"]);
}

#[test]
fn test_judgment_walk() {
    let now = Utc::now();

    let mut state: Option<Judgment> = None;
    assert!(is_queued(state.as_ref()));

    state = Some(Judgment::after_dislike(state.as_ref(), now));
    assert!(is_queued(state.as_ref()));
    assert_eq!(state.map(|j| j.dislike_count()), Some(1));

    state = Some(Judgment::after_dislike(state.as_ref(), now));
    assert!(!is_queued(state.as_ref()));

    state = Some(Judgment::after_like(state.as_ref(), now, false));
    assert!(!is_queued(state.as_ref()));
    assert!(state.is_some_and(|j| j.is_like() && !j.is_dislike()));
}

#[test]
fn test_match_requires_both_likes() {
    let now = Utc::now();
    let like = Judgment::after_like(None, now, false);
    let superlike = Judgment::after_like(None, now, true);
    let dislike = Judgment::after_dislike(None, now);

    assert!(is_match(Some(&like), Some(&superlike)));
    assert!(!is_match(Some(&like), Some(&dislike)));
    assert!(!is_match(Some(&like), None));
    assert!(is_pending_superlike(None, Some(&superlike)));
}

#[test]
fn test_tally_of_empty_catalog() {
    assert_eq!(tally(std::iter::empty()), Stats::default());
}
