//! Kiln runtime CLI.

use kiln::commands::{explain_error, list_codes, run_files};
use kiln::{CliError, Command, Config};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    kiln::init_tracing(&config);

    if let Err(err) = dispatch(&config.command) {
        eprintln!("error: {err}");
        if matches!(err, CliError::UnknownErrorCode(_)) {
            eprintln!();
            eprintln!("Run `kiln codes` for the list of error codes.");
        }
        std::process::exit(1);
    }
}

fn dispatch(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Run { paths } => run_files(paths),
        Command::Explain { code } => {
            println!("{}", explain_error(code)?);
            Ok(())
        }
        Command::Codes => {
            print!("{}", list_codes());
            Ok(())
        }
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("kiln {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Kiln - synthetic module runtime");
    println!();
    println!("Usage: kiln <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.json>...   Load JSON modules and print their default export");
    println!("  explain <code>       Describe an error code (e.g. K1002)");
    println!("  codes                List every error code");
    println!("  help                 Show this message");
    println!("  version              Show the version");
    println!();
    println!("Options:");
    println!("  --log=<filter>       Enable tracing (falls back to KILN_LOG, then RUST_LOG)");
    println!("  --log-tree           Render spans as a tree (or set KILN_LOG_TREE)");
}
