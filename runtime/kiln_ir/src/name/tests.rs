use super::*;

#[test]
fn test_name_index_round_trip() {
    let name = Name::from_raw(1000);
    assert_eq!(name.index(), 1000);
}

#[test]
fn test_name_default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert_ne!(Name::EMPTY, Name::DEFAULT);
}

#[test]
fn test_name_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Name::from_raw(1));
    set.insert(Name::from_raw(1)); // duplicate
    set.insert(Name::from_raw(2));
    assert_eq!(set.len(), 2);
}
