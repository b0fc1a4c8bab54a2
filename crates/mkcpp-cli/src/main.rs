//! # mkcpp CLI
//!
//! C++ project scaffolding from the command line.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (ignored when absent).
//! 2. Initialise the tracing subscriber (driven by `RUST_LOG`).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Hand the raw arguments to the flag library and dispatch.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! |  0   | Success, including usage/help display              |
//! |  1   | Any failure (cwd lookup, directory exists, writes) |

use std::process::ExitCode;

use tracing::{debug, info};

use crate::{
    config::AppConfig,
    error::CliError,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Initialise tracing ─────────────────────────────────────────────
    // The flag surface is fixed by the tool (`-v` means --version here), so
    // verbosity comes from RUST_LOG rather than a CLI flag.
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    // ── 2. Load configuration ─────────────────────────────────────────────
    let app_config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&app_config);

    // ── 4. Dispatch + 5. Error handling ───────────────────────────────────
    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!(?args, "CLI started");

    match cli::run(&args, &app_config, &output) {
        Ok(()) => {
            info!("mkcpp completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e),
    }
}

/// Translate a `CliError` into a user message and the failure exit code.
///
/// This is the single place where structured errors become human-readable
/// output — the format/suggestion machinery in `CliError` is all exercised
/// here. Every failure exits 1; the error taxonomy is flat by design.
fn handle_error(err: CliError) -> ExitCode {
    // 1. Emit a structured log event.
    err.log();

    // 2. Print a user-friendly message to stderr so it appears even when
    //    stdout is redirected. Colour is disabled when stderr is not a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::FAILURE
}
