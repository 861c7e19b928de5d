//! Competition endpoints: the category join and the type/gender
//! distribution charts.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::CompetitionWithCategory;
use crate::query::{self, JoinDiagnostics, ValueCount};

#[derive(Debug, Serialize)]
pub struct CompetitionsResponse {
    pub rows: Vec<CompetitionWithCategory>,

    /// Inner-join drop accounting; non-zero `dropped` means the
    /// source data has orphaned category references
    pub diagnostics: JoinDiagnostics,
}

/// `GET /api/competitions` — competitions joined with their category
/// names.
pub async fn list(State(state): State<AppState>) -> Result<Json<CompetitionsResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;
    let outcome =
        query::join_competitions_with_categories(&snapshot.competitions, &snapshot.categories);

    Ok(Json(CompetitionsResponse {
        rows: outcome.rows,
        diagnostics: outcome.diagnostics,
    }))
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub groups: Vec<ValueCount>,
}

/// `GET /api/competitions/types` — competition type distribution.
pub async fn types(State(state): State<AppState>) -> Result<Json<DistributionResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(DistributionResponse {
        groups: query::distribution(&snapshot.competitions, |c| Some(c.comp_type.clone())),
    }))
}

/// `GET /api/competitions/genders` — gender bracket distribution.
pub async fn genders(
    State(state): State<AppState>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let snapshot = state.load_snapshot()?;

    Ok(Json(DistributionResponse {
        groups: query::distribution(&snapshot.competitions, |c| Some(c.gender.clone())),
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::{build_router, state::AppState};
    use crate::models::{Category, Competition};
    use crate::store::{JsonlWriter, TableKind, TableStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn competition(name: &str, category_id: &str, comp_type: &str, gender: &str) -> Competition {
        Competition {
            competition_name: name.to_string(),
            category_id: category_id.to_string(),
            comp_type: comp_type.to_string(),
            gender: gender.to_string(),
        }
    }

    fn setup() -> (tempfile::TempDir, AppState) {
        let tmp = tempfile::tempdir().unwrap();
        let store = TableStore::new(tmp.path().to_path_buf());

        JsonlWriter::for_table(&store, TableKind::Competitions)
            .write_all(&[
                competition("Australian Open", "10", "singles", "men"),
                competition("Roland Garros", "10", "singles", "women"),
                competition("Mystery Cup", "99", "doubles", "mixed"),
            ])
            .unwrap();
        JsonlWriter::for_table(&store, TableKind::Categories)
            .write_all(&[Category {
                category_id: "10".to_string(),
                category_name: "ATP".to_string(),
            }])
            .unwrap();

        (tmp, AppState::new(store))
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_competitions_join_with_diagnostics() {
        let (_tmp, state) = setup();
        let app = build_router(state);
        let (status, json) = get_json(app, "/api/competitions").await;

        assert_eq!(status, StatusCode::OK);
        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["category_name"], "ATP");
        assert_eq!(json["diagnostics"]["dropped"], 1);
        assert_eq!(json["diagnostics"]["missing_category_ids"][0], "99");
    }

    #[tokio::test]
    async fn test_type_distribution() {
        let (_tmp, state) = setup();
        let app = build_router(state);
        let (status, json) = get_json(app, "/api/competitions/types").await;

        assert_eq!(status, StatusCode::OK);
        let groups = json["groups"].as_array().unwrap();
        let singles = groups.iter().find(|g| g["value"] == "singles").unwrap();
        assert_eq!(singles["count"], 2);
        let doubles = groups.iter().find(|g| g["value"] == "doubles").unwrap();
        assert_eq!(doubles["count"], 1);
    }

    #[tokio::test]
    async fn test_gender_distribution() {
        let (_tmp, state) = setup();
        let app = build_router(state);
        let (status, json) = get_json(app, "/api/competitions/genders").await;

        assert_eq!(status, StatusCode::OK);
        let groups = json["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
    }

    #[tokio::test]
    async fn test_competitions_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let state = AppState::new(TableStore::new(tmp.path().to_path_buf()));
        let app = build_router(state);
        let (status, json) = get_json(app, "/api/competitions").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["rows"].as_array().unwrap().is_empty());
        assert_eq!(json["diagnostics"]["dropped"], 0);
    }
}
