//! Kiln Module - synthetic module records for the Kiln runtime.
//!
//! A synthetic module is a module record whose exports are filled in by host
//! code instead of by evaluating source text. This crate implements its whole
//! lifecycle:
//!
//! - `prepare_instantiate` / `finish_instantiate`: create one binding
//!   ([`Cell`](kiln_value::Cell)) per declared export name
//! - `evaluate`: run the host's [`EvaluationSteps`] once and settle the
//!   module's top-level [`Capability`](kiln_value::Capability)
//! - `resolve_export` / `set_export` / `set_export_strict`: read and write
//!   bindings
//!
//! # Architecture
//!
//! - `ExportTable`: fixed-key map from export name to cell
//! - `ModuleStatus`: the linkage/evaluation state machine
//! - `SyntheticModule`: the record itself
//! - `ModuleMap`: host-side registry with status-checked entry points
//! - `json_module`: the synthetic module kind used for JSON imports
//!
//! # Errors
//!
//! Recoverable failures are [`ModuleError`]s. Violations of the calling
//! contract (instantiating or evaluating twice, strict writes to undeclared
//! exports) panic.

mod context;
mod engine;
pub mod errors;
mod export_table;
mod host;
mod json;
mod module_map;
mod namespace;
mod status;
mod synthetic;

pub use context::ExecutionContext;
pub use errors::{ModuleError, ModuleErrorKind};
pub use export_table::ExportTable;
pub use host::{steps_fn, EvaluationSteps};
pub use json::{json_module, parse_json, DEFAULT_EXPORT};
pub use module_map::{ModuleId, ModuleMap, ModuleMapBuilder};
pub use namespace::ModuleNamespace;
pub use status::ModuleStatus;
pub use synthetic::SyntheticModule;
