//! HTTP request handlers for the Router service.
//!
//! Implements the profile, pedigree and health check endpoints using axum.

use crate::responses::{PedigreeResponse, PetProfileResponse};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router as AxumRouter,
};
use petz_domain::AnimalId;
use petz_lineage::{LineageError, PetService};
use petz_store::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Lineage service over the registry database
    pub service: Arc<PetService<SqliteStore>>,
}

/// Query parameters for the pedigree endpoint
#[derive(Debug, Deserialize)]
pub struct PedigreeParams {
    /// Depth; defaults to the profile depth
    pub generations: Option<u32>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Largest pedigree depth accepted
    pub max_generations: u32,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Lineage engine error
    Lineage(LineageError),
    /// Malformed path or query
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Lineage(e @ LineageError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            AppError::Lineage(e @ LineageError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Lineage(e) => {
                tracing::error!("lineage request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalError(msg) => {
                tracing::error!("internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<LineageError> for AppError {
    fn from(e: LineageError) -> Self {
        AppError::Lineage(e)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Run a lineage call on the blocking pool
///
/// SQLite access is synchronous; keep it off the async workers.
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&PetService<SqliteStore>) -> Result<T, LineageError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || f(&service))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .map_err(AppError::from)
}

/// GET /api/pets/:id - Pet profile
async fn get_pet_profile(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PetProfileResponse>, AppError> {
    let Path(id) = path?;
    let id = AnimalId::from_value(id);
    let profile = run_blocking(&state, move |service| service.get_pet_profile(id)).await?;
    Ok(Json(PetProfileResponse::from(&profile)))
}

/// GET /api/pets/:id/pedigree?generations=N - Standalone pedigree
async fn get_pedigree(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PedigreeParams>, QueryRejection>,
) -> Result<Json<PedigreeResponse>, AppError> {
    let Path(id) = path?;
    let Query(params) = query?;
    let id = AnimalId::from_value(id);
    let generations = params
        .generations
        .unwrap_or(state.service.config().profile_generations);
    let pedigree = run_blocking(&state, move |service| service.get_pedigree(id, generations)).await?;
    Ok(Json(PedigreeResponse::from(&pedigree)))
}

/// GET /health - Liveness check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        max_generations: state.service.config().max_generations,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/pets/:id", get(get_pet_profile))
        .route("/api/pets/:id/pedigree", get(get_pedigree))
        .route("/health", get(health_check))
        .with_state(state)
}
