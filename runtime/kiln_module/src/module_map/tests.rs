use super::*;
use crate::{steps_fn, ModuleErrorKind};
use kiln_value::PromiseState;
use pretty_assertions::assert_eq;

fn counter_module(map: &mut ModuleMap, specifier: &str) -> ModuleId {
    map.create_synthetic(
        specifier,
        ["count"],
        steps_fn(|_cx, module| {
            module.set_export_strict("count", Value::int(1));
            Ok(Value::Undefined)
        }),
    )
    .unwrap()
}

#[test]
fn test_register_and_lookup() {
    let mut map = ModuleMap::new();
    assert!(map.is_empty());
    let id = counter_module(&mut map, "app:counter");

    assert_eq!(map.lookup("app:counter"), Some(id));
    assert_eq!(map.lookup("app:other"), None);
    assert_eq!(map.len(), 1);
    assert_eq!(map.status(id), ModuleStatus::Unlinked);
    assert_eq!(map.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![id]);
}

#[test]
fn test_duplicate_specifier_rejected() {
    let mut map = ModuleMap::new();
    counter_module(&mut map, "dup");
    let err = map
        .create_synthetic("dup", ["x"], steps_fn(|_cx, _module| Ok(Value::Undefined)))
        .unwrap_err();
    assert_eq!(
        err.kind,
        ModuleErrorKind::DuplicateModule {
            specifier: "dup".to_string()
        }
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn test_duplicate_export_names_rejected() {
    let mut map = ModuleMap::new();
    let err = map
        .create_synthetic("m", ["a", "a"], steps_fn(|_cx, _module| Ok(Value::Undefined)))
        .unwrap_err();
    assert_eq!(err.kind.code(), kiln_diagnostic::ErrorCode::K1004);
    assert!(map.is_empty());
}

#[test]
fn test_load_runs_both_phases() {
    let mut map = ModuleMap::new();
    let id = counter_module(&mut map, "c");

    let capability = map.load(id).unwrap();

    assert_eq!(map.status(id), ModuleStatus::Evaluated);
    assert_eq!(capability.state(), PromiseState::Fulfilled(Value::Undefined));
    assert_eq!(map.resolve_export(id, "count").unwrap().get(), Value::int(1));
    assert!(map.capability(id).unwrap().ptr_eq(&capability));
}

#[test]
fn test_instantiate_is_idempotent_at_map_level() {
    let mut map = ModuleMap::new();
    let id = counter_module(&mut map, "c");
    map.instantiate(id).unwrap();
    map.instantiate(id).unwrap();
    assert_eq!(map.status(id), ModuleStatus::Linked);
}

#[test]
fn test_evaluate_unlinked_is_an_error() {
    let mut map = ModuleMap::new();
    let id = counter_module(&mut map, "c");
    let err = map.evaluate(id).unwrap_err();
    assert_eq!(
        err.kind,
        ModuleErrorKind::InvalidStatus {
            specifier: "c".to_string(),
            operation: "evaluate",
            status: ModuleStatus::Unlinked,
        }
    );
    assert_eq!(map.status(id), ModuleStatus::Unlinked);
}

#[test]
fn test_second_evaluate_returns_same_capability() {
    let mut map = ModuleMap::new();
    let id = counter_module(&mut map, "c");
    let first = map.load(id).unwrap();

    // Host steps would panic if re-run (their slot is empty).
    let second = map.evaluate(id).unwrap();
    assert!(first.ptr_eq(&second));
}

#[test]
fn test_errored_module_fails_again_with_recorded_error() {
    let mut map = ModuleMap::new();
    let id = map
        .create_synthetic("bad", ["x"], steps_fn(|_cx, _module| Err(Value::string("boom"))))
        .unwrap();

    let first = map.load(id).unwrap_err();
    let second = map.evaluate(id).unwrap_err();

    assert_eq!(map.exception(id), Some(&Value::string("boom")));
    assert_eq!(first, second);
    assert!(map.capability(id).is_none());

    let err = map.instantiate(id).unwrap_err();
    assert!(matches!(
        err.kind,
        ModuleErrorKind::InvalidStatus {
            status: ModuleStatus::Errored,
            ..
        }
    ));
}

#[test]
fn test_strict_resolution_uses_module_specifier() {
    let mut map = ModuleMap::new();
    let id = counter_module(&mut map, "lib");
    map.instantiate(id).unwrap();
    let err = map.resolve_export(id, "nope").unwrap_err();
    assert_eq!(
        err.message,
        "the requested module 'lib' does not provide an export named 'nope'"
    );
}

#[test]
fn test_json_modules_share_the_map_interner() {
    let interner = SharedInterner::new();
    let mut map = ModuleMap::builder()
        .interner(interner.clone())
        .capacity(4)
        .build();
    let id = map.create_json("./data.json", r#"{"k": "v"}"#).unwrap();

    assert!(map.get(id).interner().ptr_eq(&interner));
    map.load(id).unwrap();
    let namespace = map.namespace(id).unwrap();
    assert_eq!(namespace.names().collect::<Vec<_>>(), vec!["default"]);
}

#[test]
#[should_panic(expected = "different interner")]
fn test_foreign_interner_panics() {
    let mut map = ModuleMap::new();
    let module = SyntheticModule::new(
        SharedInterner::new(),
        "foreign",
        ["a"],
        steps_fn(|_cx, _module| Ok(Value::Undefined)),
    );
    let _ = map.insert(module);
}

#[test]
fn test_host_capability_flows_through_map() {
    let mut map = ModuleMap::new();
    let pending = Capability::pending();
    let returned = pending.clone();
    let id = map
        .create_synthetic("async", ["ready"], steps_fn(move |_cx, _module| {
            Ok(Value::Capability(returned))
        }))
        .unwrap();

    let capability = map.load(id).unwrap();
    assert!(capability.is_pending());
    pending.reject(Value::string("later"));
    assert_eq!(capability.state(), PromiseState::Rejected(Value::string("later")));
}

#[test]
fn test_pending_exception_does_not_leak_into_next_module() {
    let mut map = ModuleMap::new();
    let a = map
        .create_synthetic(
            "a",
            ["x"],
            steps_fn(|cx, _module| {
                cx.throw(Value::string("stale"));
                Ok(Value::Undefined)
            }),
        )
        .unwrap();
    let b = map
        .create_synthetic("b", ["y"], steps_fn(|_cx, _module| Err(Value::string("boom"))))
        .unwrap();

    assert!(map.load(a).is_err());
    assert!(map.load(b).is_err());

    assert_eq!(map.exception(a), Some(&Value::string("stale")));
    assert_eq!(map.exception(b), Some(&Value::string("boom")));
}
