//! The `explain` and `codes` commands.

use kiln_diagnostic::ErrorCode;

use crate::CliError;

/// Describe the error code `code_str`.
pub fn explain_error(code_str: &str) -> Result<String, CliError> {
    let code = ErrorCode::parse(code_str)
        .ok_or_else(|| CliError::UnknownErrorCode(code_str.to_string()))?;
    let phase = if code.is_link_error() {
        "linking"
    } else if code.is_evaluation_error() {
        "evaluation"
    } else {
        "module source"
    };
    Ok(format!("{code} ({phase} error)\n\n{}", code.description()))
}

/// One line per error code.
pub fn list_codes() -> String {
    ErrorCode::ALL
        .iter()
        .map(|code| format!("{code}  {}\n", code.description()))
        .collect()
}
