//! Competitor-ranking endpoints: the filtered table, leaderboards,
//! movement distribution, and the spreadsheet export.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{CompetitorRanking, FilterSpec, RankRange};
use crate::query::{self, ValueCount, HIGHLIGHT_SIZE, LEADERBOARD_SIZE};

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub country: Option<String>,
    pub rank_min: Option<u32>,
    pub rank_max: Option<u32>,
    pub name: Option<String>,
}

impl FilterParams {
    fn into_spec(self) -> FilterSpec {
        let default = RankRange::default();
        FilterSpec {
            country: self.country,
            rank_range: RankRange::new(
                self.rank_min.unwrap_or(default.min),
                self.rank_max.unwrap_or(default.max),
            ),
            name_query: self.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub rows: Vec<CompetitorRanking>,
    pub total: u32,

    /// Full rank range of the unfiltered dataset, for the range
    /// slider; null when the dataset is empty
    pub rank_bounds: Option<RankRange>,
}

/// `GET /api/rankings` — the filtered competitor table.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<RankingsResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;
    let spec = params.into_spec();

    let rows = query::apply(&snapshot.competitor_rankings, &spec)?;
    let rank_bounds = query::rank_bounds(&snapshot.competitor_rankings);

    Ok(Json(RankingsResponse {
        total: rows.len() as u32,
        rows,
        rank_bounds,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TopNParams {
    pub n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub rows: Vec<CompetitorRanking>,
}

/// `GET /api/rankings/leaderboard` — top N by points (default 10).
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;
    let n = params.n.unwrap_or(LEADERBOARD_SIZE).min(100);

    Ok(Json(LeaderboardResponse {
        rows: query::top_n_by_points(&snapshot.competitor_rankings, n),
    }))
}

/// `GET /api/rankings/active` — top N by competitions played
/// (default 5).
pub async fn most_active(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;
    let n = params.n.unwrap_or(HIGHLIGHT_SIZE).min(100);

    Ok(Json(LeaderboardResponse {
        rows: query::top_n_by_activity(&snapshot.competitor_rankings, n),
    }))
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub groups: Vec<ValueCount>,
}

/// `GET /api/rankings/movements` — rank movement distribution.
pub async fn movements(
    State(state): State<AppState>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(DistributionResponse {
        groups: query::movement_distribution(&snapshot.competitor_rankings),
    }))
}

/// `GET /api/rankings/export.csv` — spreadsheet dump of the filtered
/// relation, same predicates as `/api/rankings`.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let snapshot = state.load_snapshot()?;
    let spec = params.into_spec();

    let rows = query::apply(&snapshot.competitor_rankings, &spec)?;
    let csv = crate::export::rankings_to_csv(&rows)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"filtered_competitors.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
