//! Errors surfaced by the command line driver.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// A command was given without an argument it needs.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown error code: {0}")]
    UnknownErrorCode(String),

    /// Some modules loaded but at least one failed.
    #[error("{failed} of {total} modules failed to load")]
    ModulesFailed { failed: usize, total: usize },
}
