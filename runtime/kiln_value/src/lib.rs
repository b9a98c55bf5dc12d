//! Kiln Value - the value model the module runtime is built on.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`)
//! - Binding cells (`Cell`), the storage behind every module export
//! - Result capabilities (`Capability`, `PromiseState`), handles to an
//!   eventually settled result
//!
//! # Thread Safety
//!
//! Everything here is single-threaded (`Rc` based, `!Send`). Module linkage and
//! evaluation run on one call stack, and the types make that a compile-time
//! guarantee rather than a convention.

mod capability;
mod cell;
mod heap;
mod value;

pub use capability::{Capability, PromiseState};
pub use cell::Cell;
pub use heap::Heap;
pub use value::Value;
