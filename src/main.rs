#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use mcptoggle::{
    cli::Cli,
    config::{reader, writer, ToggleConfig},
    servers::{build_server_list, save_entries, SaveOutcome, Scope, ServerEntry},
    session::{Outcome, Session},
    tui, McpToggleError,
};
use tracing::{debug, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.debug, cli.trace);

    let config = ToggleConfig::new(cli.config)?;
    debug!("Using configuration file: {}", config.config_path.display());
    debug!("Project key: {}", config.project_key());

    let document = match reader::read_document(&config.config_path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    };

    let entries = match build_server_list(&document, &config.current_dir) {
        Ok(entries) => entries,
        Err(McpToggleError::EmptyConfiguration) => {
            println!("No MCP servers found in {}", config.config_path.display());
            std::process::exit(1);
        },
        Err(e) => return Err(e.into()),
    };

    if cli.list {
        print_entries(&entries);
        return Ok(());
    }

    run_session(&config, entries, cli.backup)
}

/// Initialize tracing with the specified debug/trace flags
fn initialize_tracing(debug: bool, trace: bool) {
    let log_level = if trace {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy())
        .init();
}

fn run_session(config: &ToggleConfig, entries: Vec<ServerEntry>, backup: bool) -> Result<()> {
    let mut session = Session::new(entries);

    let outcome = match tui::run(&mut session) {
        Ok(outcome) => outcome,
        Err(e) => {
            if matches!(
                e.downcast_ref::<McpToggleError>(),
                Some(McpToggleError::UnsupportedTerminal)
            ) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            return Err(e);
        },
    };

    match outcome {
        Outcome::Save => {},
        Outcome::Cancelled | Outcome::Running => {
            println!("Cancelled. No changes saved.");
            return Ok(());
        },
    }

    if backup {
        match writer::backup_file(&config.config_path) {
            Ok(Some(backup_path)) => println!("Backup created: {backup_path}"),
            Ok(None) => debug!("No backup needed (file doesn't exist)"),
            Err(e) => warn!("Failed to create backup for {}: {e}", config.config_path.display()),
        }
    }

    let entries = session.into_entries();
    match save_entries(config, &entries).context("Failed to save MCP server changes")? {
        SaveOutcome::Written => print_summary(&entries),
        SaveOutcome::Skipped { reason } => {
            eprintln!("{reason}; no changes were saved");
        },
    }

    Ok(())
}

fn entry_label(entry: &ServerEntry) -> String {
    match entry.scope {
        Scope::Global => entry.name.clone(),
        Scope::Local => format!("{} (local)", entry.name),
    }
}

fn print_entries(entries: &[ServerEntry]) {
    for entry in entries {
        let state = if entry.enabled { "on " } else { "off" };
        println!("[{state}] {}", entry_label(entry));
    }
}

fn print_summary(entries: &[ServerEntry]) {
    let (enabled, disabled): (Vec<_>, Vec<_>) = entries.iter().partition(|e| e.enabled);

    println!(
        "Saved MCP server configuration: {} enabled, {} disabled",
        enabled.len(),
        disabled.len()
    );
    if !enabled.is_empty() {
        let names: Vec<String> = enabled.iter().map(|e| entry_label(e)).collect();
        println!("  enabled:  {}", names.join(", "));
    }
    if !disabled.is_empty() {
        let names: Vec<String> = disabled.iter().map(|e| entry_label(e)).collect();
        println!("  disabled: {}", names.join(", "));
    }
}
