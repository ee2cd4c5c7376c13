mod cli;

use std::io::IsTerminal;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Git expects helpers to ignore operations they don't understand, so any
    // parse failure other than help/version is a silent success.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => std::process::exit(0),
        },
    };

    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Get) => cli::get::run(),

        Some(Commands::Store) | Some(Commands::Erase) => Ok(()),

        Some(Commands::Init) => cli::init::run(),

        Some(Commands::Exports) => cli::exports::run(),

        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        Some(Commands::Config { command }) => cli::config::run(command),

        Some(Commands::Other(args)) => {
            debug!("Ignoring unsupported operation: {:?}", args);
            Ok(())
        }

        None => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Logs go to stderr; stdout carries the helper response.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(env_filter(verbosity, level))
        .init();
}

/// `RUST_LOG` sets the filter when present; an explicit `-v` still raises the
/// level on top of it.
fn env_filter(verbosity: u8, level: Level) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) if verbosity > 0 => filter.add_directive(level.into()),
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(level.as_str()),
    }
}
