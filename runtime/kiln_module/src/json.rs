//! JSON modules: synthetic modules with a single `default` export holding
//! the parsed document.

use std::collections::BTreeMap;

use kiln_ir::SharedInterner;
use kiln_value::Value;

use crate::errors::invalid_json;
use crate::{steps_fn, ModuleError, SyntheticModule};

/// Export name of a JSON module's only binding.
pub const DEFAULT_EXPORT: &str = "default";

/// Create a JSON module for `source`.
///
/// Parsing happens during evaluation, so a malformed document surfaces the way
/// any host failure does: as the module's recorded error, with the evaluation
/// failing.
pub fn json_module(
    interner: SharedInterner,
    specifier: &str,
    source: impl Into<String>,
) -> SyntheticModule {
    let source = source.into();
    SyntheticModule::new(
        interner,
        specifier,
        [DEFAULT_EXPORT],
        steps_fn(move |_cx, module| {
            let document = parse_json(&source)
                .map_err(|err| Value::string(format!("SyntaxError: {}", err.message)))?;
            module.set_export_strict(DEFAULT_EXPORT, document);
            Ok(Value::Undefined)
        }),
    )
}

/// Parse a JSON document into a runtime value.
///
/// Integers that fit in `i64` stay integers; every other number becomes a
/// float.
pub fn parse_json(source: &str) -> Result<Value, ModuleError> {
    let document: serde_json::Value =
        serde_json::from_str(source).map_err(|err| invalid_json(err.to_string()))?;
    Ok(convert(document))
}

fn convert(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::string(s),
        serde_json::Value::Array(items) => Value::list(items.into_iter().map(convert).collect()),
        serde_json::Value::Object(fields) => Value::record(
            fields
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

#[cfg(test)]
mod tests;
