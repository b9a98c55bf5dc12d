//! Command handlers for the `kiln` CLI.
//!
//! Handlers build their output as data or text and leave printing to the
//! binary, except `run_files`, which reports each module as it loads.

mod explain;
mod run;

pub use explain::{explain_error, list_codes};
pub use run::{load_json_modules, run_files, ModuleReport};

#[cfg(test)]
mod tests;
