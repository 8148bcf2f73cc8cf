//! Pillbox - a multi-select combo box with pills
//!
//! The library is split into a host-agnostic interaction core and a terminal
//! front end that drives it:
//!
//! - [`combo`]: matching, selection requests, active-option navigation,
//!   keyboard routing and focus-boundary detection
//! - [`catalog`]: loading option catalogs from TOML, JSON or plain text
//! - [`config`]: user defaults for the `pillbox` binary
//! - [`ui`]: the terminal host (focus tree, ratatui picker, stdout reporting)
//! - [`cli`]: command-line definitions
//! - [`logging`]: tracing subscriber setup for the binary

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod combo;
pub mod config;
pub mod logging;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PillboxError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
