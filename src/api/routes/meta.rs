//! Health and overview endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::query::{self, Overview};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: u32,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    #[serde(flatten)]
    pub kpis: Overview,
    pub tables: Vec<TableCount>,
}

/// `GET /api/overview` — the KPI header block plus per-table row
/// counts. An empty dataset is a valid (all-zero) overview, not an
/// error.
pub async fn overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    let tables = snapshot
        .table_counts()
        .into_iter()
        .map(|(table, rows)| TableCount {
            table,
            rows: rows as u32,
        })
        .collect();

    Ok(Json(OverviewResponse {
        kpis: query::overview(&snapshot.competitor_rankings),
        tables,
    }))
}
