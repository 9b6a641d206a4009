//! Nanny CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use nanny::advisory::{exit, AdvisoryCommand};
use nanny::cli::Cli;
use nanny::config::Settings;
use nanny::probe::native_probe;
use nanny::ui::Presentation;
use nanny::NannyError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Snapshot of the standard streams taken before the runtime starts.
#[cfg(any(target_os = "linux", target_os = "android"))]
#[used]
#[link_section = ".init_array"]
static RECORD_STDIO: extern "C" fn() = {
    extern "C" fn record() {
        nanny::ui::terminal::record_startup_stdio();
    }
    record
};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the advisory.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nanny=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nanny=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(exit::USAGE)
            } else {
                ExitCode::from(exit::SUCCESS)
            };
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("Nanny starting with args: {:?}", cli);

    let settings = Settings::from_env();
    match run(&cli, &settings) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, NannyError::Usage { .. }) {
                eprintln!();
                let _ = Cli::command().write_help(&mut std::io::stderr());
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli, settings: &Settings) -> nanny::Result<u8> {
    let request = cli.to_request(settings)?;
    let command = AdvisoryCommand::new(request, Box::new(native_probe()), cli.consent_ledger());

    let mut presentation = Presentation::select(settings, cli.text);
    let outcome = command.execute(&mut presentation)?;
    tracing::debug!(?outcome, "advisory finished");
    Ok(outcome.exit_code())
}
