//! Filter engine for the competitor-ranking relation.

use crate::models::{CompetitorRanking, FilterSpec, RankRange};

use super::QueryError;

/// Apply a [`FilterSpec`] to the ranking relation.
///
/// The three predicates compose as a logical AND and the relative
/// order of surviving rows matches the input (stable filter). The
/// input is never mutated; a fresh relation is returned.
///
/// Name matching folds case with `str::to_lowercase`, i.e. Unicode
/// simple case folding, which is locale-independent. Country matching
/// is exact and case-sensitive, as in the source data.
///
/// Returns [`QueryError::InvalidFilterSpec`] when the rank range is
/// inverted; an empty input relation is fine and yields an empty
/// output.
pub fn apply(
    relation: &[CompetitorRanking],
    spec: &FilterSpec,
) -> Result<Vec<CompetitorRanking>, QueryError> {
    if spec.rank_range.min > spec.rank_range.max {
        return Err(QueryError::InvalidFilterSpec {
            min: spec.rank_range.min,
            max: spec.rank_range.max,
        });
    }

    let country = spec.country_filter();
    let name_query = spec.name_filter().map(|q| q.to_lowercase());

    let rows = relation
        .iter()
        .filter(|row| country.map_or(true, |c| row.country == c))
        .filter(|row| spec.rank_range.contains(row.rank))
        .filter(|row| {
            name_query
                .as_deref()
                .map_or(true, |q| row.name.to_lowercase().contains(q))
        })
        .cloned()
        .collect();

    Ok(rows)
}

/// The full rank range present in the relation, for defaulting the
/// dashboard's range slider. `None` on an empty relation.
pub fn rank_bounds(relation: &[CompetitorRanking]) -> Option<RankRange> {
    let min = relation.iter().map(|r| r.rank).min()?;
    let max = relation.iter().map(|r| r.rank).max()?;
    Some(RankRange::new(min, max))
}
