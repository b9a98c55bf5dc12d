//! Driver configuration: the parsed command line with environment fallbacks.

use std::path::PathBuf;

use crate::CliError;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load and evaluate JSON modules.
    Run { paths: Vec<PathBuf> },
    /// Describe an error code.
    Explain { code: String },
    /// List every error code.
    Codes,
    Help,
    Version,
}

/// Driver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    /// `EnvFilter` directives. `None` leaves tracing off.
    pub log_filter: Option<String>,
    /// Render spans as a tree instead of flat lines.
    pub log_tree: bool,
}

impl Config {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Build from `args` (without the program name), looking up environment
    /// fallbacks through `env`.
    ///
    /// `--log=<filter>` beats `KILN_LOG`, which beats `RUST_LOG`.
    /// `--log-tree` or a non-empty `KILN_LOG_TREE` selects tree output.
    pub fn parse<I, S>(args: I, env: impl Fn(&str) -> Option<String>) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut log_filter = None;
        let mut log_tree = false;
        let mut positional = Vec::new();

        for arg in args {
            let arg: String = arg.into();
            if let Some(filter) = arg.strip_prefix("--log=") {
                log_filter = Some(filter.to_string());
            } else if arg == "--log-tree" {
                log_tree = true;
            } else if arg == "--help" || arg == "-h" {
                positional.insert(0, "help".to_string());
            } else if arg == "--version" || arg == "-V" {
                positional.insert(0, "version".to_string());
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg));
            } else {
                positional.push(arg);
            }
        }

        let log_filter = log_filter
            .or_else(|| env("KILN_LOG"))
            .or_else(|| env("RUST_LOG"));
        log_tree |= env("KILN_LOG_TREE").is_some_and(|v| !v.is_empty());

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("help") => Command::Help,
            Some("version") => Command::Version,
            Some("codes") => Command::Codes,
            Some("explain") => {
                let Some(code) = positional.next() else {
                    return Err(CliError::MissingArgument {
                        command: "explain",
                        expected: "an error code",
                    });
                };
                Command::Explain { code }
            }
            Some("run") => {
                let paths: Vec<PathBuf> = positional.map(PathBuf::from).collect();
                if paths.is_empty() {
                    return Err(CliError::MissingArgument {
                        command: "run",
                        expected: "at least one JSON file",
                    });
                }
                Command::Run { paths }
            }
            Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(Config {
            command,
            log_filter,
            log_tree,
        })
    }
}
