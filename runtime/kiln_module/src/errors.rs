//! Error types for module linkage and evaluation.
//!
//! `ModuleErrorKind` is the message template table: each variant carries its
//! typed arguments and its `Display` impl renders the message. Factory
//! functions (`undefined_export()`, …) are the public API and populate both
//! `kind` and `message`.
//!
//! Contract violations by the embedding runtime (building a table twice,
//! evaluating twice, strict writes to undeclared exports) are not represented
//! here. They panic.

use std::fmt;

use kiln_diagnostic::{Diagnostic, ErrorCode};
use kiln_value::Value;

use crate::ModuleStatus;

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleErrorKind {
    // Linking
    /// A write named an export with no binding.
    UndefinedExport { name: String },
    /// A strict lookup named an export with no binding.
    UnresolvableExport { specifier: String, name: String },
    /// A module-map operation that the module's status does not allow.
    InvalidStatus {
        specifier: String,
        operation: &'static str,
        status: ModuleStatus,
    },
    DuplicateExportName { name: String },
    DuplicateModule { specifier: String },

    // Evaluation
    /// The host evaluation steps threw `thrown`.
    HostEvaluation { specifier: String, thrown: Value },

    // Module source
    InvalidJson { message: String },
}

impl ModuleErrorKind {
    /// Diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedExport { .. } => ErrorCode::K1001,
            Self::UnresolvableExport { .. } => ErrorCode::K1002,
            Self::InvalidStatus { .. } => ErrorCode::K1003,
            Self::DuplicateExportName { .. } => ErrorCode::K1004,
            Self::DuplicateModule { .. } => ErrorCode::K1005,
            Self::HostEvaluation { .. } => ErrorCode::K2001,
            Self::InvalidJson { .. } => ErrorCode::K3001,
        }
    }

    /// Specifier of the module the error is about, when the kind records one.
    pub fn specifier(&self) -> Option<&str> {
        match self {
            Self::UnresolvableExport { specifier, .. }
            | Self::InvalidStatus { specifier, .. }
            | Self::DuplicateModule { specifier }
            | Self::HostEvaluation { specifier, .. } => Some(specifier),
            Self::UndefinedExport { .. }
            | Self::DuplicateExportName { .. }
            | Self::InvalidJson { .. } => None,
        }
    }
}

impl fmt::Display for ModuleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedExport { name } => {
                write!(f, "export '{name}' is not defined in module")
            }
            Self::UnresolvableExport { specifier, name } => write!(
                f,
                "the requested module '{specifier}' does not provide an export named '{name}'"
            ),
            Self::InvalidStatus {
                specifier,
                operation,
                status,
            } => write!(f, "cannot {operation} module '{specifier}': module is {status}"),
            Self::DuplicateExportName { name } => {
                write!(f, "duplicate export name '{name}'")
            }
            Self::DuplicateModule { specifier } => {
                write!(f, "module '{specifier}' is already registered")
            }
            Self::HostEvaluation { thrown, .. } => {
                write!(f, "module evaluation failed: {thrown}")
            }
            Self::InvalidJson { message } => write!(f, "invalid JSON module source: {message}"),
        }
    }
}

/// Module linkage or evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleError {
    /// Structured error category.
    pub kind: ModuleErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
    /// Additional context.
    pub notes: Vec<String>,
}

impl ModuleError {
    fn from_kind(kind: ModuleErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The value the host threw, for `HostEvaluation` errors.
    pub fn thrown(&self) -> Option<&Value> {
        match &self.kind {
            ModuleErrorKind::HostEvaluation { thrown, .. } => Some(thrown),
            _ => None,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.code()).with_message(self.message.clone());
        if let Some(specifier) = self.kind.specifier() {
            diag = diag.with_module(specifier);
        }
        for note in &self.notes {
            diag = diag.with_note(note.clone());
        }
        match &self.kind {
            ModuleErrorKind::UndefinedExport { name } => diag.with_suggestion(format!(
                "add '{name}' to the export names the module is created with"
            )),
            ModuleErrorKind::InvalidStatus { .. } => {
                diag.with_suggestion("instantiate the module before evaluating it")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ModuleError {}

/// Write to an export the module never declared.
#[cold]
pub fn undefined_export(name: &str) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::UndefinedExport {
        name: name.to_string(),
    })
}

/// Strict resolution of an export `specifier` does not provide.
#[cold]
pub fn unresolvable_export(specifier: &str, name: &str) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::UnresolvableExport {
        specifier: specifier.to_string(),
        name: name.to_string(),
    })
}

/// Operation not allowed in the module's current status.
#[cold]
pub fn invalid_status(
    specifier: &str,
    operation: &'static str,
    status: ModuleStatus,
) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::InvalidStatus {
        specifier: specifier.to_string(),
        operation,
        status,
    })
}

/// Export name listed twice at construction.
#[cold]
pub fn duplicate_export_name(name: &str) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::DuplicateExportName {
        name: name.to_string(),
    })
}

/// Module specifier registered twice.
#[cold]
pub fn duplicate_module(specifier: &str) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::DuplicateModule {
        specifier: specifier.to_string(),
    })
}

/// Host evaluation steps threw.
#[cold]
pub fn host_evaluation(specifier: &str, thrown: Value) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::HostEvaluation {
        specifier: specifier.to_string(),
        thrown,
    })
}

/// JSON module source failed to parse.
#[cold]
pub fn invalid_json(message: impl Into<String>) -> ModuleError {
    ModuleError::from_kind(ModuleErrorKind::InvalidJson {
        message: message.into(),
    })
}
