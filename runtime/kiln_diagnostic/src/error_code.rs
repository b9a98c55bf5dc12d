//! Error codes, one per diagnosable failure.

use std::fmt;

/// Error codes for all runtime diagnostics.
///
/// Format: K#### where the first digit indicates the phase:
/// - K1xxx: Linking errors (export resolution and binding)
/// - K2xxx: Evaluation errors
/// - K3xxx: Module source errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Linking Errors (K1xxx)
    /// Write to an export the module never declared
    K1001,
    /// Strict resolution of an export the module does not provide
    K1002,
    /// Operation not valid in the module's current status
    K1003,
    /// Export name declared twice
    K1004,
    /// Module specifier registered twice
    K1005,

    // Evaluation Errors (K2xxx)
    /// Host evaluation steps threw
    K2001,

    // Module Source Errors (K3xxx)
    /// JSON module source is not valid JSON
    K3001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::K1001,
        ErrorCode::K1002,
        ErrorCode::K1003,
        ErrorCode::K1004,
        ErrorCode::K1005,
        ErrorCode::K2001,
        ErrorCode::K3001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::K1001 => "K1001",
            ErrorCode::K1002 => "K1002",
            ErrorCode::K1003 => "K1003",
            ErrorCode::K1004 => "K1004",
            ErrorCode::K1005 => "K1005",
            ErrorCode::K2001 => "K2001",
            ErrorCode::K3001 => "K3001",
        }
    }

    /// One-line explanation used by `kiln explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::K1001 => "a value was written to an export the module never declared",
            ErrorCode::K1002 => "an import named an export the module does not provide",
            ErrorCode::K1003 => "the module is not in a status that allows this operation",
            ErrorCode::K1004 => "the same export name was declared more than once",
            ErrorCode::K1005 => "a module with this specifier is already registered",
            ErrorCode::K2001 => "the host evaluation steps threw while evaluating the module",
            ErrorCode::K3001 => "the source of a JSON module could not be parsed",
        }
    }

    /// Parse a code such as `K1001` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// Check if this is a linking error (K1xxx).
    pub fn is_link_error(&self) -> bool {
        self.as_str().starts_with("K1")
    }

    /// Check if this is an evaluation error (K2xxx).
    pub fn is_evaluation_error(&self) -> bool {
        self.as_str().starts_with("K2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
