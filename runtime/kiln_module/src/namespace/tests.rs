use crate::{steps_fn, ExecutionContext, SyntheticModule};
use kiln_ir::SharedInterner;
use kiln_value::Value;
use pretty_assertions::assert_eq;

fn linked(names: &[&str]) -> SyntheticModule {
    let mut module = SyntheticModule::new(
        SharedInterner::new(),
        "ns",
        names.iter().copied(),
        steps_fn(|_cx, module| {
            module.set_export_strict("zeta", Value::int(26));
            Ok(Value::Undefined)
        }),
    );
    module.instantiate();
    module
}

#[test]
fn test_names_are_sorted() {
    let module = linked(&["zeta", "alpha", "Mid"]);
    let namespace = module.namespace().unwrap();
    assert_eq!(namespace.specifier(), "ns");
    assert_eq!(namespace.len(), 3);
    assert_eq!(
        namespace.names().collect::<Vec<_>>(),
        vec!["Mid", "alpha", "zeta"]
    );
}

#[test]
fn test_reads_are_live() {
    let mut module = linked(&["zeta", "alpha"]);
    let namespace = module.namespace().unwrap();
    assert_eq!(namespace.get("zeta"), Some(Value::Undefined));

    module.evaluate(&mut ExecutionContext::default()).unwrap();
    module.set_export("alpha", Value::bool(true)).unwrap();

    assert_eq!(
        namespace.entries().collect::<Vec<_>>(),
        vec![("alpha", Value::bool(true)), ("zeta", Value::int(26))]
    );
}

#[test]
fn test_missing_name() {
    let module = linked(&["zeta"]);
    assert_eq!(module.namespace().unwrap().get("alpha"), None);
}
