//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for pillbox using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Run the interactive picker (default)
//! - **config**: Read or change saved defaults
//!
//! # Examples
//!
//! ```
//! use pillbox::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["pillbox", "colours.toml", "--create", "-s", "Red"]);
//! match cli.get_command() {
//!     Commands::Pick(args) => assert_eq!(args.select, vec!["Red".to_string()]),
//!     Commands::Config { .. } => unreachable!(),
//! }
//! ```

use crate::ui::{PickerSettings, SelectionFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pillbox")]
#[command(about = "Pick several options from a list, with type-ahead filtering", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub pick: PickArgs,

    /// Append logs to this file
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level (overridden by PILLBOX_LOG / RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive picker (default)
    #[command(visible_alias = "p")]
    Pick(PickArgs),

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., allow_create=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., prompt)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file path
    Path,
}

/// Output format for the final selection
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary and one value per line
    #[default]
    Pretty,
    /// Values only
    Plain,
    /// JSON array
    Json,
}

impl From<OutputFormat> for SelectionFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => Self::Pretty,
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Arguments for the picker
#[derive(Args, Debug, Clone, Default)]
pub struct PickArgs {
    /// Catalog file (.toml, .json or .txt); defaults to the configured one
    #[arg(value_name = "CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Extra options to offer (can specify multiple: -o Red -o Blue)
    #[arg(short = 'o', long = "option", value_name = "LABEL")]
    pub options: Vec<String>,

    /// Options selected at start (can specify multiple)
    #[arg(short = 's', long = "select", value_name = "LABEL")]
    pub select: Vec<String>,

    /// Allow creating options that are not in the catalog
    #[arg(short = 'c', long = "create", conflicts_with = "no_create")]
    pub create: bool,

    /// Disallow creating options (overrides config)
    #[arg(long = "no-create", conflicts_with = "create")]
    pub no_create: bool,

    /// Open the option list immediately
    #[arg(long = "open")]
    pub open: bool,

    /// Prompt shown before the search field
    #[arg(long = "prompt", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Maximum option rows shown at once
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    /// How to print the selection
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

impl PickArgs {
    /// Apply command-line overrides on top of config-derived settings
    pub fn apply(&self, settings: &mut PickerSettings) {
        if self.create {
            settings.allow_create = true;
        } else if self.no_create {
            settings.allow_create = false;
        }
        if self.open {
            settings.list_open_initial = true;
        }
        if let Some(prompt) = &self.prompt {
            settings.prompt.clone_from(prompt);
        }
        if let Some(rows) = self.rows {
            settings.max_visible = rows.max(1);
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick with the top-level arguments
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Pick(self.pick.clone()))
    }
}

/// Split a `key=value` setting
///
/// Returns `None` when there is no `=`.
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}
