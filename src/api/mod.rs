//! REST API endpoints.
//!
//! Axum-based HTTP API serving the derived views the dashboard
//! renders: filtered rankings, leaderboards, country aggregates,
//! distributions, and the joined competitions table.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::query::QueryError;
use crate::store::StoreError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidFilterSpec { .. } => ApiError::BadRequest(e.to_string()),
            QueryError::MissingJoinKey { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::meta::health))
        .route("/api/overview", get(routes::meta::overview))
        .route("/api/rankings", get(routes::rankings::list))
        .route("/api/rankings/leaderboard", get(routes::rankings::leaderboard))
        .route("/api/rankings/active", get(routes::rankings::most_active))
        .route("/api/rankings/movements", get(routes::rankings::movements))
        .route("/api/rankings/export.csv", get(routes::rankings::export_csv))
        .route("/api/countries/points", get(routes::countries::points))
        .route("/api/countries/competitors", get(routes::countries::competitors))
        .route("/api/competitions", get(routes::competitions::list))
        .route("/api/competitions/types", get(routes::competitions::types))
        .route("/api/competitions/genders", get(routes::competitions::genders))
        .route("/api/venues", get(routes::venues::venues))
        .route("/api/complexes", get(routes::venues::complexes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
