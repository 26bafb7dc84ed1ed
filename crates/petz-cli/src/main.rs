//! Petz CLI - Command-line interface for the pedigree registry.

use anyhow::Context;
use clap::Parser;
use petz_cli::{commands, Cli, Command, Formatter};
use petz_lineage::{LineageConfig, PetService};
use petz_store::SqliteStore;
use std::sync::{Arc, Mutex};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = SqliteStore::new(&cli.db)
        .with_context(|| format!("failed to open registry database {}", cli.db))?;
    let service = PetService::new(Arc::new(Mutex::new(store)), LineageConfig::default())?;

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match cli.command {
        Command::Profile(args) => commands::execute_profile(args, &service, &formatter)?,
        Command::Pedigree(args) => commands::execute_pedigree(args, &service, &formatter)?,
    }

    Ok(())
}
