//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `mkcpp-core`
//! only *emits* spans and events — it never touches subscribers.
//!
//! The tool's flag namespace is taken by the scaffolding flags (`-v` is
//! `--version`), so verbosity is controlled through `RUST_LOG` alone; the
//! default filter is `warn`.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. Returns an
/// error if a subscriber was already registered in this process.
pub fn init_logging() -> anyhow::Result<()> {
    // RUST_LOG wins; otherwise keep each crate at warn.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Honour NO_COLOR (https://no-color.org) and piped stderr.
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}
