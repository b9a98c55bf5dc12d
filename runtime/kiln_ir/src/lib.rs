//! Kiln IR - shared identifier types for the Kiln module runtime.
//!
//! Export names and module specifiers are interned once and compared as
//! 32-bit [`Name`]s everywhere else. The interner is the one structure in the
//! runtime that may be shared across threads.

mod interner;
mod name;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
