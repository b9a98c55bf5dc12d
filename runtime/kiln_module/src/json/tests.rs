use super::*;
use crate::{ExecutionContext, ModuleErrorKind, ModuleStatus};
use kiln_value::PromiseState;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_json_values() {
    let value = parse_json(r#"{"port": 8080, "ratio": 0.5, "tags": ["a", null], "on": true}"#)
        .unwrap();
    let mut expected = BTreeMap::new();
    expected.insert("on".to_string(), Value::bool(true));
    expected.insert("port".to_string(), Value::int(8080));
    expected.insert("ratio".to_string(), Value::float(0.5));
    expected.insert(
        "tags".to_string(),
        Value::list(vec![Value::string("a"), Value::Null]),
    );
    assert_eq!(value, Value::record(expected));
}

#[test]
fn test_parse_json_large_numbers_become_floats() {
    assert_eq!(
        parse_json("18446744073709551615").unwrap(),
        Value::float(2f64.powi(64))
    );
}

#[test]
fn test_parse_json_error_kind() {
    let err = parse_json("{ nope").unwrap_err();
    assert!(matches!(err.kind, ModuleErrorKind::InvalidJson { .. }));
}

#[test]
fn test_json_module_default_export() {
    let mut module = json_module(SharedInterner::new(), "./config.json", "[1, 2]");
    assert_eq!(module.export_names().collect::<Vec<_>>(), vec![DEFAULT_EXPORT]);

    module.instantiate();
    let result = module.evaluate(&mut ExecutionContext::default()).unwrap();

    assert_eq!(result, Value::Undefined);
    assert_eq!(
        module.namespace().unwrap().get(DEFAULT_EXPORT),
        Some(Value::list(vec![Value::int(1), Value::int(2)]))
    );
    assert_eq!(
        module.top_level_capability().unwrap().state(),
        PromiseState::Fulfilled(Value::Undefined)
    );
}

#[test]
fn test_json_module_syntax_error_is_recorded() {
    let mut module = json_module(SharedInterner::new(), "./broken.json", "{");
    module.instantiate();
    let err = module.evaluate(&mut ExecutionContext::default()).unwrap_err();

    assert_eq!(module.status(), ModuleStatus::Errored);
    let recorded = module.recorded_error().and_then(Value::as_str).unwrap();
    assert!(recorded.starts_with("SyntaxError: invalid JSON module source"));
    assert_eq!(err.thrown(), module.recorded_error());
}
