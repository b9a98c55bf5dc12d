use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::K1001)
        .with_message("export 'x' is not defined in module")
        .with_module("app")
        .with_note("declared exports: a, b");

    assert_eq!(diag.code, ErrorCode::K1001);
    assert_eq!(diag.module.as_deref(), Some("app"));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_diagnostic_render_plain() {
    let diag = Diagnostic::error(ErrorCode::K2001).with_message("module evaluation failed: boom");
    assert_eq!(diag.to_string(), "error[K2001]: module evaluation failed: boom");
}

#[test]
fn test_diagnostic_render_full() {
    let diag = Diagnostic::error(ErrorCode::K1003)
        .with_message("cannot evaluate module 'config': module is unlinked")
        .with_module("config")
        .with_note("status is unlinked")
        .with_suggestion("instantiate the module before evaluating it");

    assert_eq!(
        diag.to_string(),
        "error[K1003]: cannot evaluate module 'config': module is unlinked\n  \
         --> module 'config'\n  \
         = note: status is unlinked\n  \
         = help: instantiate the module before evaluating it"
    );
}
