//! Competitions↔categories join.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, Competition, CompetitionWithCategory};

use super::QueryError;

/// What the inner join left behind.
///
/// The pandas-style merge in the original dashboards dropped
/// competitions with an orphaned `category_id` without a trace; the
/// drop is kept as policy here but counted and reported so a
/// data-quality problem can't hide inside it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JoinDiagnostics {
    /// Number of competitions excluded by the inner join
    pub dropped: u32,

    /// Distinct category ids that had no match, in first-seen order
    pub missing_category_ids: Vec<String>,
}

/// Result of the competitions↔categories join.
#[derive(Debug, Clone, Serialize)]
pub struct JoinOutcome {
    pub rows: Vec<CompetitionWithCategory>,
    pub diagnostics: JoinDiagnostics,
}

/// Inner join competitions with categories on `category_id`.
///
/// Unmatched competitions are excluded and accounted for in the
/// diagnostics. Output order follows the competitions input.
pub fn join_competitions_with_categories(
    competitions: &[Competition],
    categories: &[Category],
) -> JoinOutcome {
    let by_id: HashMap<&str, &Category> = categories
        .iter()
        .map(|c| (c.category_id.as_str(), c))
        .collect();

    let mut rows = Vec::with_capacity(competitions.len());
    let mut diagnostics = JoinDiagnostics::default();

    for comp in competitions {
        match by_id.get(comp.category_id.as_str()) {
            Some(category) => rows.push(CompetitionWithCategory {
                competition_name: comp.competition_name.clone(),
                comp_type: comp.comp_type.clone(),
                gender: comp.gender.clone(),
                category_name: category.category_name.clone(),
            }),
            None => {
                diagnostics.dropped += 1;
                if !diagnostics
                    .missing_category_ids
                    .contains(&comp.category_id)
                {
                    diagnostics.missing_category_ids.push(comp.category_id.clone());
                }
            }
        }
    }

    if diagnostics.dropped > 0 {
        tracing::warn!(
            dropped = diagnostics.dropped,
            missing = ?diagnostics.missing_category_ids,
            "inner join excluded competitions with unmatched category ids"
        );
    }

    JoinOutcome { rows, diagnostics }
}

/// Like [`join_competitions_with_categories`] but treats an orphaned
/// competition as corruption: fails with the first missing key
/// instead of dropping rows.
pub fn join_competitions_with_categories_strict(
    competitions: &[Competition],
    categories: &[Category],
) -> Result<Vec<CompetitionWithCategory>, QueryError> {
    let by_id: HashMap<&str, &Category> = categories
        .iter()
        .map(|c| (c.category_id.as_str(), c))
        .collect();

    competitions
        .iter()
        .map(|comp| match by_id.get(comp.category_id.as_str()) {
            Some(category) => Ok(CompetitionWithCategory {
                competition_name: comp.competition_name.clone(),
                comp_type: comp.comp_type.clone(),
                gender: comp.gender.clone(),
                category_name: category.category_name.clone(),
            }),
            None => Err(QueryError::MissingJoinKey {
                competition: comp.competition_name.clone(),
                category_id: comp.category_id.clone(),
            }),
        })
        .collect()
}
