//! Petz Router
//!
//! HTTP surface for the lineage engine: pet profiles and pedigrees served
//! as JSON from a SQLite registry database.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod responses;

use config::RouterConfig;
use handlers::{create_router, AppState};
use petz_lineage::{LineageError, PetService};
use petz_store::{SqliteStore, StoreError};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Database could not be opened
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Lineage service could not be created
    #[error("Lineage error: {0}")]
    Lineage(#[from] LineageError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Open the registry database and build the application state
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    let store = SqliteStore::new(&config.database_path)?;
    let service = PetService::new(Arc::new(Mutex::new(store)), config.lineage.clone())?;

    Ok(AppState {
        service: Arc::new(service),
    })
}

/// Start the Router HTTP server
///
/// Opens the database, builds the lineage service, and starts the axum
/// server.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    init_tracing(&config.log_level);

    info!("Starting Petz Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Database: {}", config.database_path);
    info!(
        "Pedigree depth: profile {}, max {}",
        config.lineage.profile_generations, config.lineage.max_generations
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_from_test_config() {
        let config = RouterConfig::default_test_config();
        let state = build_state(&config).unwrap();
        assert_eq!(state.service.config().profile_generations, 3);
    }
}
