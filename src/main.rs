//! MACROHARD - terminal spreadsheet ribbon editor
//!
//! Shows a spreadsheet-style ribbon whose groups, components and dropdowns
//! can be rearranged and renamed in place.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use macrohard::cli::{CliResult, LayoutArgs, MigrateArgs};
use macrohard::config::{Config, ThemeMode};
use macrohard::constants::{APP_BINARY_NAME, APP_NAME};
use macrohard::logging::{init_logging, LogTarget};
use macrohard::models::starter_ribbon;
use macrohard::parser::{parse_ribbon_json, validate_ribbon};
use macrohard::tui;
use std::path::PathBuf;
use tracing::{info, warn};

/// MACROHARD - terminal spreadsheet ribbon editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Ribbon JSON file to start from (defaults to the starter ribbon)
    #[arg(value_name = "FILE")]
    ribbon_path: Option<PathBuf>,

    /// Color theme (overrides the config file)
    #[arg(long, value_enum, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved grid of every group
    Layout(LayoutArgs),
    /// Print a ribbon file with explicit columns
    Migrate(MigrateArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Layout(args) => args.execute(),
            Self::Migrate(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        run_command(command, cli.verbose);
    }

    run_editor(&cli)
}

/// Runs a headless command and exits with its code.
fn run_command(command: &Command, verbose: bool) -> ! {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {e:#}");
        Config::new()
    });
    if let Err(e) = init_logging(&config.logging, verbose, &LogTarget::Stderr) {
        eprintln!("Warning: {e:#}");
    }

    match command.execute() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.code.code());
        }
    }
}

/// Runs the terminal UI.
fn run_editor(cli: &Cli) -> Result<()> {
    // First launch writes the defaults so users have a file to edit
    let first_launch = !Config::exists();
    let mut config = Config::load().context("Failed to load configuration")?;
    let saved_defaults = first_launch.then(|| config.save());

    init_logging(
        &config.logging,
        cli.verbose,
        &LogTarget::File(config.log_file_path()?),
    )?;
    info!(version = env!("CARGO_PKG_VERSION"), "{APP_NAME} starting");
    match saved_defaults {
        Some(Ok(())) => info!("Wrote default configuration"),
        Some(Err(e)) => warn!("Failed to write default configuration: {e:#}"),
        None => {}
    }

    if let Some(mode) = cli.theme {
        config.ui.theme_mode = mode;
    }

    let groups = match &cli.ribbon_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Ribbon file not found: {}", path.display());
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} ribbon.json");
                eprintln!("  {APP_BINARY_NAME} layout ribbon.json");
                std::process::exit(2);
            }
            let groups = parse_ribbon_json(path)?;
            let problems = validate_ribbon(&groups);
            if !problems.is_empty() {
                anyhow::bail!("Invalid ribbon file:\n  {}", problems.join("\n  "));
            }
            info!(path = %path.display(), groups = groups.len(), "Loaded ribbon");
            groups
        }
        None => starter_ribbon(),
    };

    let mut state = tui::AppState::new(&groups, cli.ribbon_path.clone(), config);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
