//! Venue and complex passthrough tables.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Complex, Venue};

#[derive(Debug, Serialize)]
pub struct VenuesResponse {
    pub rows: Vec<Venue>,
}

/// `GET /api/venues`
pub async fn venues(State(state): State<AppState>) -> Result<Json<VenuesResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(VenuesResponse {
        rows: snapshot.venues,
    }))
}

#[derive(Debug, Serialize)]
pub struct ComplexesResponse {
    pub rows: Vec<Complex>,
}

/// `GET /api/complexes` — records passed through unmodified.
pub async fn complexes(
    State(state): State<AppState>,
) -> Result<Json<ComplexesResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(ComplexesResponse {
        rows: snapshot.complexes,
    }))
}
