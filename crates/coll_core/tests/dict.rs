mod common;

use coll_core::{Collection, Dict, ErrorKind};

use common::{abc_dict, english};

#[test]
fn add_rejects_duplicates_without_changing_anything() {
    english();
    let mut dict = abc_dict();
    let ver = dict.version();
    let err = dict.add(2, "z".to_string()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "An item with the same key has already been added.");
    assert_eq!(dict.get(&2).map(String::as_str), Some("b"));
    assert_eq!(dict.version(), ver);
}

#[test]
fn version_moves_only_on_structural_change() {
    english();
    let mut dict: Dict<&str, i32> = Dict::new();
    assert_eq!(dict.version(), 0);
    dict.insert("a", 1);
    assert_eq!(dict.version(), 1);
    assert_eq!(dict.insert("a", 2), Some(1));
    assert_eq!(dict.version(), 1);
    *dict.get_mut("a").unwrap() += 1;
    assert_eq!(dict.version(), 1);
    assert_eq!(dict.remove("missing"), None);
    assert_eq!(dict.version(), 1);
    assert_eq!(dict.remove("a"), Some(3));
    assert_eq!(dict.version(), 2);
    dict.clear();
    assert_eq!(dict.version(), 2);
}

#[test]
fn remove_keeps_insertion_order() {
    english();
    let mut dict: Dict<i32, char> = (1..=5).zip("abcde".chars()).collect();
    dict.remove(&2);
    assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5]);
    assert_eq!(dict.get_index(1), Some((&3, &'c')));
}

#[test]
fn missing_keys_are_missing_key_errors() {
    english();
    let mut dict = abc_dict();
    assert_eq!(dict.get_or_err(&1).unwrap(), "a");
    let err = dict.get_or_err(&7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(dict.try_remove(&3).unwrap(), "a");
    assert_eq!(dict.try_remove(&3).unwrap_err().kind(), ErrorKind::KeyNotFound);
}

#[test]
fn try_from_pairs_stops_at_first_duplicate() {
    english();
    let err = Dict::try_from_pairs([("x", 1), ("y", 2), ("x", 3)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let dict: Dict<&str, i32> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(dict.get("x"), Some(&3));
    assert_eq!(dict.len(), 2);
}

#[test]
fn contains_value_scans_current_entries() {
    english();
    let mut dict = abc_dict();
    assert!(dict.contains_value(&"b".to_string()));
    dict.remove(&2);
    assert!(!dict.contains_value(&"b".to_string()));
    assert!(dict.contains_key(&1));
}

#[test]
fn dict_as_collection_of_pairs() {
    english();
    let mut dict = abc_dict();
    assert!(!dict.is_read_only());
    assert!(dict.contains(&(1, "a".to_string())));
    assert!(!dict.contains(&(1, "b".to_string())));

    assert!(!Collection::remove(&mut dict, &(1, "b".to_string())).unwrap());
    assert!(Collection::remove(&mut dict, &(1, "a".to_string())).unwrap());
    assert_eq!(dict.len(), 2);

    Collection::add(&mut dict, (8, "h".to_string())).unwrap();
    assert!(Collection::add(&mut dict, (8, "i".to_string())).is_err());

    let mut dest = vec![(0, String::new()); 3];
    dict.copy_to(&mut dest, 0).unwrap();
    assert_eq!(dest[2], (8, "h".to_string()));

    Collection::clear(&mut dict).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn debug_shows_entries_in_order() {
    english();
    let dict = abc_dict();
    assert_eq!(format!("{:?}", dict), r#"{1: "a", 2: "b", 3: "a"}"#);
}
