//! Diagnostic system for module linkage and evaluation errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - The module the error belongs to (where it went wrong)
//! - Notes and suggestions (why, and how to fix)
//!
//! Message text is produced by the error kinds of the layer that raises the
//! error; this crate only carries and renders it.

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
