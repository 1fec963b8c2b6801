mod common;

use coll_core::{Dict, ErrorKind, SharedDict};

use common::{abc_dict, english};

#[test]
fn live_view_tracks_every_mutation() {
    english();
    let shared = SharedDict::new(Dict::new());
    let view = shared.values();
    assert_eq!(view.len().unwrap(), 0);
    assert!(view.is_empty().unwrap());

    shared.borrow_mut().insert("k1", 10);
    assert_eq!(view.len().unwrap(), shared.borrow().len());
    shared.borrow_mut().insert("k2", 20);
    assert_eq!(view.len().unwrap(), 2);
    assert!(view.contains(&20).unwrap());

    shared.borrow_mut().remove("k1");
    assert_eq!(view.len().unwrap(), 1);
    assert!(!view.contains(&10).unwrap());
    assert_eq!(view.to_vec().unwrap(), [20]);
}

#[test]
fn pass_reads_state_at_enumeration_time_not_creation_time() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let mut pass = view.iter();
    // Nothing has been read yet, so this change is part of the pass.
    shared.borrow_mut().insert(4, "d".to_string());
    let values: Vec<String> = pass.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(values, ["a", "b", "a", "d"]);
    assert!(pass.next().is_none());
}

#[test]
fn structural_change_mid_pass_fails_fast() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let mut pass = view.iter();
    assert_eq!(pass.next().unwrap().unwrap(), "a");

    shared.borrow_mut().insert(9, "z".to_string());

    let err = pass.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert_eq!(
        err.to_string(),
        "Collection was modified; enumeration operation may not execute."
    );
    assert!(pass.next().is_none());

    // A new pass sees the new state.
    assert_eq!(view.to_vec().unwrap(), ["a", "b", "a", "z"]);
}

#[test]
fn removal_and_clear_mid_pass_fail_fast() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();

    let mut pass = view.iter();
    pass.next();
    shared.borrow_mut().remove(&2);
    assert!(pass.next().unwrap().is_err());

    let mut pass = view.iter();
    pass.next();
    shared.borrow_mut().clear();
    assert!(pass.next().unwrap().is_err());
}

#[test]
fn overwriting_a_value_is_not_structural() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let mut pass = view.iter();
    assert_eq!(pass.next().unwrap().unwrap(), "a");
    shared.borrow_mut().insert(2, "B".to_string());
    let rest: Vec<String> = pass.collect::<Result<_, _>>().unwrap();
    assert_eq!(rest, ["B", "a"]);
}

#[test]
fn view_does_not_keep_store_alive() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let other_handle = shared.clone();
    drop(shared);
    assert!(view.is_alive());
    assert_eq!(view.len().unwrap(), 3);

    drop(other_handle);
    assert!(!view.is_alive());
    let err = view.len().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert!(err.message().contains("dropped"));
    let mut pass = view.iter();
    assert!(pass.next().unwrap().is_err());
    assert!(pass.next().is_none());
}

#[test]
fn store_borrowed_for_mutation_is_reported() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let guard = shared.borrow_mut();
    let err = view.contains(&"a".to_string()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert_eq!(err.message(), "The backing dictionary is currently borrowed for mutation.");
    drop(guard);
    assert!(view.contains(&"a".to_string()).unwrap());
}

#[test]
fn live_view_rejects_mutation() {
    english();
    let shared = SharedDict::new(abc_dict());
    let mut view = shared.values();
    assert_eq!(view.add("x".into()).unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(view.remove(&"a".into()).unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(view.clear().unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(shared.borrow().len(), 3);
}

#[test]
fn live_copy_to_checks_room_first() {
    english();
    let shared = SharedDict::new(abc_dict());
    let view = shared.values();
    let mut dest = vec![String::new(); 3];
    view.copy_to(&mut dest, 0).unwrap();
    assert_eq!(dest, ["a", "b", "a"]);

    let mut short = vec![String::from("keep"); 2];
    let err = view.copy_to(&mut short, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(short, ["keep", "keep"]);
}
