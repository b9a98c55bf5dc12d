//! Kiln - host driver for the synthetic module runtime.
//!
//! Wires the runtime crates into something runnable:
//! - `Config`: command line plus environment fallbacks
//! - `init_tracing`: subscriber setup, opt-in via `--log`/`KILN_LOG`/`RUST_LOG`
//! - `commands`: one handler per CLI command

pub mod commands;
mod config;
mod error;

use std::sync::Once;

pub use config::{Command, Config};
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `config` carries a log filter. Safe to call more than
/// once; only the first call has any effect.
pub fn init_tracing(config: &Config) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(filter) = config.log_filter.as_deref() else {
            return;
        };
        let tree = config
            .log_tree
            .then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));
        let flat = (!config.log_tree).then(|| fmt::layer().with_target(true).with_level(true));
        tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(EnvFilter::new(filter))
            .init();
    });
}
