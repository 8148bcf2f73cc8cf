//! Pillbox CLI application entry point
//!
//! Runs the multi-select combo box in the terminal and prints what was
//! picked.
//!
//! # Usage
//!
//! ```bash
//! # Pick from a catalog file
//! pillbox colours.toml
//!
//! # Ad-hoc options, free-form creation, values only
//! pillbox -o Red -o Green -o Blue --create --format plain
//!
//! # Start with some options selected
//! pillbox colours.toml -s Red -s Blue
//!
//! # Save defaults
//! pillbox config set allow_create=true
//! pillbox config set default_catalog=~/colours.toml
//!
//! # Log key routing and focus decisions
//! PILLBOX_LOG=pillbox=trace pillbox colours.toml --log-file /tmp/pillbox.log
//! ```
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/pillbox/config.toml` on Linux); flags override them.

use pillbox::{
    PillboxError, catalog,
    cli::{Cli, Commands, ConfigCommands, PickArgs, split_setting},
    combo::{CatalogEntry, ComboOption, flatten_catalog, fold_eq, labels_catalog},
    config::PillboxConfig,
    logging,
    ui::{OutputWriter, PickerSettings, RatatuiPicker, StdoutWriter, report_selection},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, PillboxError>;

/// Build the catalog from the catalog file and `--option` labels
fn load_catalog(args: &PickArgs, config: &PillboxConfig) -> Result<Vec<CatalogEntry>> {
    let mut entries = match args.catalog.as_ref().or(config.default_catalog.as_ref()) {
        Some(path) => catalog::load(path)?,
        None => Vec::new(),
    };
    entries.extend(labels_catalog(args.options.iter().cloned()));
    Ok(entries)
}

/// Resolve `--select` labels against the catalog
fn preselect(
    entries: &[CatalogEntry],
    labels: &[String],
    allow_create: bool,
) -> Result<Vec<ComboOption>> {
    let mut selected: Vec<ComboOption> = Vec::with_capacity(labels.len());
    for label in labels {
        if selected.iter().any(|option| fold_eq(&option.label, label)) {
            continue;
        }
        match catalog::find_option(entries, label) {
            Some(option) => selected.push(option),
            None if allow_create => selected.push(ComboOption::labelled(label.trim())),
            None => {
                return Err(PillboxError::InvalidInput(format!(
                    "'{label}' is not in the catalog. Use --create to allow new options"
                )));
            }
        }
    }
    Ok(selected)
}

/// Handle the pick command
fn handle_pick_command(args: &PickArgs, config: &PillboxConfig) -> Result<ExitCode> {
    let mut settings = PickerSettings::from(config);
    args.apply(&mut settings);

    let entries = load_catalog(args, config)?;
    let selected = preselect(&entries, &args.select, settings.allow_create)?;
    let catalog_labels: Vec<String> = flatten_catalog(&entries)
        .into_iter()
        .map(|option| option.label)
        .collect();

    let result = RatatuiPicker::new(settings).run(entries, selected)?;

    let output = StdoutWriter::new();
    if result.aborted {
        output.info("Cancelled");
        return Ok(ExitCode::from(130));
    }
    report_selection(&output, &result.selected, &catalog_labels, args.format.into());
    Ok(ExitCode::SUCCESS)
}

/// Handle the config command
fn handle_config_command(mut config: PillboxConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                PillboxError::InvalidInput("Invalid format. Use: pillbox config set key=value".into())
            })?;
            config.set(key, value)?;
            config.save()?;
            StdoutWriter::new().success(&format!("Set {key} = {}", config.get(key)?));
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).map_err(|_| {
                PillboxError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    PillboxConfig::KEYS.join(", ")
                ))
            })?;
            println!("{value}");
        }
        ConfigCommands::Path => {
            println!("{}", PillboxConfig::config_path()?.display());
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode> {
    logging::init(cli.log_file.as_deref(), cli.verbose)?;
    let config = PillboxConfig::load()?;

    match cli.get_command() {
        Commands::Pick(args) => handle_pick_command(&args, &config),
        Commands::Config { command } => {
            handle_config_command(config, &command)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Main entry point for the pillbox application
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "pillbox failed");
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
