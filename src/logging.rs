//! Tracing subscriber initialization for the `pillbox` binary
//!
//! The picker owns the terminal, so logs never go to stdout or stderr while
//! it runs. They are written to the file given with `--log-file`; without
//! one no subscriber is installed.
//!
//! # Filter priority (highest to lowest)
//!
//! 1. `PILLBOX_LOG` env var (e.g. `pillbox::combo=trace,warn`)
//! 2. `RUST_LOG` env var
//! 3. `--verbose` (debug) or the default (warn)

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "PILLBOX_LOG";

/// Install the global subscriber, appending to `log_file`
///
/// Does nothing when `log_file` is `None`. A second call is ignored.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>, verbose: bool) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(fmt_layer)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,pillbox=debug" } else { "warn" }
}

/// Build an `EnvFilter` from `PILLBOX_LOG`, then `RUST_LOG`, then the flag
fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(default_directive(verbose))
}
