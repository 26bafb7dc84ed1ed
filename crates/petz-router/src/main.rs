//! Petz Router CLI
//!
//! Starts the Router HTTP server for pet profiles and pedigrees.

use petz_router::{config::RouterConfig, start_server, RouterError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: petz-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Petz Router - Pedigree and Profile API");
    println!();
    println!("USAGE:");
    println!("    petz-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    GET /api/pets/:id                          Pet profile");
    println!("    GET /api/pets/:id/pedigree?generations=N   Pedigree N generations deep");
    println!("    GET /health                                Liveness check");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - database_path: SQLite registry database");
    println!("    - log_level: Default log filter (default: 'info', RUST_LOG overrides)");
    println!("    - [lineage] profile_generations (default 3), max_generations (default 8)");
    println!();
}
