use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_throw_and_take() {
    let mut cx = ExecutionContext::default();
    assert!(!cx.has_pending_exception());

    cx.throw(Value::string("first"));
    cx.throw(Value::string("second"));
    assert!(cx.has_pending_exception());
    assert_eq!(cx.take_pending_exception(), Some(Value::string("second")));
    assert_eq!(cx.take_pending_exception(), None);
}

#[test]
fn test_shares_interner() {
    let interner = SharedInterner::new();
    let cx = ExecutionContext::new(interner.clone());
    assert!(cx.interner().ptr_eq(&interner));
}
