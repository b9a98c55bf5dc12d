use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("answer");
    let b = interner.intern("answer");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "answer");
}

#[test]
fn test_well_known_names() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.intern("default"), Name::DEFAULT);
    assert_eq!(interner.lookup(Name::DEFAULT), "default");
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), before);

    let name = interner.intern("missing");
    assert_eq!(interner.get("missing"), Some(name));
    assert_eq!(interner.len(), before + 1);
}

#[test]
fn test_shared_interner_clones_share_storage() {
    let shared = SharedInterner::new();
    let clone = shared.clone();
    let name = shared.intern("x");
    assert!(shared.ptr_eq(&clone));
    assert_eq!(clone.get("x"), Some(name));
    assert!(!shared.ptr_eq(&SharedInterner::new()));
}
