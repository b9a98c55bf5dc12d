use super::*;
use kiln_diagnostic::ErrorCode;
use kiln_module::{ModuleMap, ModuleStatus};
use kiln_value::Value;
use pretty_assertions::assert_eq;

use crate::CliError;

fn inputs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(specifier, source)| ((*specifier).to_string(), (*source).to_string()))
        .collect()
}

#[test]
fn test_load_reports_default_export() {
    let mut map = ModuleMap::new();
    let reports = load_json_modules(&mut map, inputs(&[("config.json", r#"{"port": 8080}"#)]));

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.status, ModuleStatus::Evaluated);
    assert_eq!(
        report.to_string(),
        "config.json [evaluated]\n  default: record = {\"port\": 8080}"
    );
}

#[test]
fn test_bad_document_does_not_stop_others() {
    let mut map = ModuleMap::new();
    let reports = load_json_modules(
        &mut map,
        inputs(&[("bad.json", "{"), ("good.json", "[1, 2]")]),
    );

    assert!(!reports[0].is_ok());
    assert_eq!(reports[0].status, ModuleStatus::Errored);
    let rendered = reports[0].to_string();
    assert!(rendered.starts_with("error[K2001]: module evaluation failed: \"SyntaxError:"));
    assert!(rendered.contains("--> module 'bad.json'"));

    assert_eq!(reports[1].outcome, Ok(Value::list(vec![Value::int(1), Value::int(2)])));
}

#[test]
fn test_duplicate_specifier_is_reported() {
    let mut map = ModuleMap::new();
    let reports = load_json_modules(&mut map, inputs(&[("a.json", "1"), ("a.json", "2")]));

    assert_eq!(reports[0].outcome, Ok(Value::int(1)));
    let err = reports[1].outcome.as_ref().unwrap_err();
    assert_eq!(err.kind.code(), ErrorCode::K1005);
    assert_eq!(reports[1].status, ModuleStatus::Unlinked);
}

#[test]
fn test_run_files_missing_file() {
    let path = std::path::PathBuf::from("definitely/not/here.json");
    let err = run_files(&[path]).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read 'definitely/not/here.json'"));
}

#[test]
fn test_explain_known_code() {
    let text = explain_error("k1002").unwrap();
    assert_eq!(
        text,
        "K1002 (linking error)\n\nan import named an export the module does not provide"
    );
    assert!(explain_error("K2001").unwrap().starts_with("K2001 (evaluation error)"));
    assert!(explain_error("K3001").unwrap().starts_with("K3001 (module source error)"));
}

#[test]
fn test_explain_unknown_code() {
    let err = explain_error("E0001").unwrap_err();
    assert_eq!(err.to_string(), "unknown error code: E0001");
}

#[test]
fn test_list_codes_covers_all() {
    let listing = list_codes();
    assert_eq!(listing.lines().count(), ErrorCode::ALL.len());
    assert!(listing.starts_with("K1001  "));
}
