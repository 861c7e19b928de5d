//! Per-country aggregate endpoints for the "Country View" charts.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::query::{self, CountryCount, CountryPoints};

#[derive(Debug, Serialize)]
pub struct CountryPointsResponse {
    pub countries: Vec<CountryPoints>,
}

/// `GET /api/countries/points` — top countries by total points.
pub async fn points(
    State(state): State<AppState>,
) -> Result<Json<CountryPointsResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(CountryPointsResponse {
        countries: query::sum_points_by_country(&snapshot.competitor_rankings),
    }))
}

#[derive(Debug, Serialize)]
pub struct CountryCountResponse {
    pub countries: Vec<CountryCount>,
}

/// `GET /api/countries/competitors` — top countries by competitor
/// count.
pub async fn competitors(
    State(state): State<AppState>,
) -> Result<Json<CountryCountResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(CountryCountResponse {
        countries: query::count_by_country(&snapshot.competitor_rankings),
    }))
}
