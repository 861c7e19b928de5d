//! Aggregation engine: derived views over the ranking relation.
//!
//! Every function is deterministic and total on empty input. Top-N
//! sorts are stable, so rank ties resolve to input order (first seen
//! wins), and country ties resolve by ascending country name so the
//! output order never depends on hash iteration.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::CompetitorRanking;

/// Countries kept in the per-country charts.
pub const TOP_COUNTRIES: usize = 15;

/// Default leaderboard size.
pub const LEADERBOARD_SIZE: usize = 10;

/// Default size of the top-points chart and most-active table.
pub const HIGHLIGHT_SIZE: usize = 5;

/// Distribution key for rows with a missing categorical value.
///
/// Rows are never dropped from a distribution; a relation whose field
/// is entirely absent yields one group under this sentinel.
pub const UNKNOWN_GROUP: &str = "unknown";

/// Aggregated points for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryPoints {
    pub country: String,
    pub total_points: u64,
}

/// Competitor count for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub competitor_count: u32,
}

/// One group of a categorical distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u32,
}

/// KPI block shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_competitors: u32,
    /// Best (numerically smallest) rank present, `None` when empty
    pub top_rank: Option<u32>,
    pub highest_points: Option<u64>,
    pub countries_represented: u32,
    pub generated_at: DateTime<Utc>,
}

/// Top `n` rows by points, descending. Ties keep input order.
pub fn top_n_by_points(relation: &[CompetitorRanking], n: usize) -> Vec<CompetitorRanking> {
    let mut rows = relation.to_vec();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows.truncate(n);
    rows
}

/// Top `n` rows by competitions played, descending. Ties keep input
/// order.
pub fn top_n_by_activity(relation: &[CompetitorRanking], n: usize) -> Vec<CompetitorRanking> {
    let mut rows = relation.to_vec();
    rows.sort_by(|a, b| b.competitions_played.cmp(&a.competitions_played));
    rows.truncate(n);
    rows
}

/// Total points per country, descending, country name breaking ties,
/// truncated to [`TOP_COUNTRIES`].
pub fn sum_points_by_country(relation: &[CompetitorRanking]) -> Vec<CountryPoints> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for row in relation {
        *totals.entry(row.country.as_str()).or_default() += row.points;
    }

    let mut out: Vec<CountryPoints> = totals
        .into_iter()
        .map(|(country, total_points)| CountryPoints {
            country: country.to_string(),
            total_points,
        })
        .collect();

    out.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.country.cmp(&b.country))
    });
    out.truncate(TOP_COUNTRIES);
    out
}

/// Competitor count per country, descending, country name breaking
/// ties, truncated to [`TOP_COUNTRIES`].
pub fn count_by_country(relation: &[CompetitorRanking]) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for row in relation {
        *counts.entry(row.country.as_str()).or_default() += 1;
    }

    let mut out: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, competitor_count)| CountryCount {
            country: country.to_string(),
            competitor_count,
        })
        .collect();

    out.sort_by(|a, b| {
        b.competitor_count
            .cmp(&a.competitor_count)
            .then_with(|| a.country.cmp(&b.country))
    });
    out.truncate(TOP_COUNTRIES);
    out
}

/// Grouped counts of one categorical field.
///
/// `key` extracts the field; `None` or an empty string groups under
/// [`UNKNOWN_GROUP`]. Groups appear in first-seen input order, each
/// distinct value exactly once.
pub fn distribution<T, F>(relation: &[T], key: F) -> Vec<ValueCount>
where
    F: Fn(&T) -> Option<String>,
{
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for row in relation {
        let value = match key(row) {
            Some(v) if !v.is_empty() => v,
            _ => UNKNOWN_GROUP.to_string(),
        };
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_default() += 1;
    }

    order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            ValueCount { value, count }
        })
        .collect()
}

/// Movement distribution over the ranking relation.
pub fn movement_distribution(relation: &[CompetitorRanking]) -> Vec<ValueCount> {
    distribution(relation, |r| Some(r.movement.label().to_string()))
}

/// KPI block for the dashboard header. Total on empty input: the
/// min/max KPIs become `None` instead of panicking.
pub fn overview(relation: &[CompetitorRanking]) -> Overview {
    let countries: std::collections::HashSet<&str> =
        relation.iter().map(|r| r.country.as_str()).collect();

    Overview {
        total_competitors: relation.len() as u32,
        top_rank: relation.iter().map(|r| r.rank).min(),
        highest_points: relation.iter().map(|r| r.points).max(),
        countries_represented: countries.len() as u32,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movement;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<CompetitorRanking> {
        vec![
            CompetitorRanking::new("A", "USA", 1, 100)
                .with_movement(Movement::Same)
                .with_competitions_played(10),
            CompetitorRanking::new("B", "FRA", 2, 90)
                .with_movement(Movement::Up)
                .with_competitions_played(20),
            CompetitorRanking::new("C", "USA", 3, 80)
                .with_movement(Movement::Up)
                .with_competitions_played(15),
        ]
    }

    #[test]
    fn test_top_n_by_points() {
        let top = top_n_by_points(&sample(), 2);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_top_n_larger_than_relation() {
        let top = top_n_by_points(&sample(), 50);
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let rows = vec![
            CompetitorRanking::new("First", "AAA", 1, 100),
            CompetitorRanking::new("Second", "BBB", 2, 100),
            CompetitorRanking::new("Third", "CCC", 3, 100),
        ];
        let top = top_n_by_points(&rows, 2);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_top_n_unselected_never_beat_selected() {
        let rows = sample();
        let top = top_n_by_points(&rows, 2);
        let min_selected = top.iter().map(|r| r.points).min().unwrap();
        for row in &rows {
            if !top.iter().any(|t| t.name == row.name) {
                assert!(row.points <= min_selected);
            }
        }
    }

    #[test]
    fn test_top_n_by_activity() {
        let top = top_n_by_activity(&sample(), 2);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_sum_points_by_country() {
        let sums = sum_points_by_country(&sample());
        assert_eq!(
            sums,
            vec![
                CountryPoints {
                    country: "USA".to_string(),
                    total_points: 180
                },
                CountryPoints {
                    country: "FRA".to_string(),
                    total_points: 90
                },
            ]
        );
    }

    #[test]
    fn test_sum_points_conserves_total() {
        let rows = sample();
        let input_total: u64 = rows.iter().map(|r| r.points).sum();
        let output_total: u64 = sum_points_by_country(&rows)
            .iter()
            .map(|c| c.total_points)
            .sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn test_sum_points_ties_sort_by_country_name() {
        let rows = vec![
            CompetitorRanking::new("A", "SRB", 1, 50),
            CompetitorRanking::new("B", "ESP", 2, 50),
        ];
        let sums = sum_points_by_country(&rows);
        assert_eq!(sums[0].country, "ESP");
        assert_eq!(sums[1].country, "SRB");
    }

    #[test]
    fn test_sum_points_truncates_to_top_countries() {
        let rows: Vec<CompetitorRanking> = (0..20)
            .map(|i| CompetitorRanking::new(format!("P{i}"), format!("C{i:02}"), i + 1, 100 - i as u64))
            .collect();
        let sums = sum_points_by_country(&rows);
        assert_eq!(sums.len(), TOP_COUNTRIES);
        // Highest totals survive the cut
        assert_eq!(sums[0].country, "C00");
    }

    #[test]
    fn test_count_by_country() {
        let counts = count_by_country(&sample());
        assert_eq!(counts[0].country, "USA");
        assert_eq!(counts[0].competitor_count, 2);
        assert_eq!(counts[1].country, "FRA");
        assert_eq!(counts[1].competitor_count, 1);
    }

    #[test]
    fn test_distribution_first_seen_order_and_completeness() {
        let dist = movement_distribution(&sample());
        assert_eq!(
            dist,
            vec![
                ValueCount {
                    value: "same".to_string(),
                    count: 1
                },
                ValueCount {
                    value: "up".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_distribution_missing_values_group_under_sentinel() {
        let rows = vec![("a", None::<String>), ("b", None), ("c", Some("x".to_string()))];
        let dist = distribution(&rows, |(_, v)| v.clone());
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].value, UNKNOWN_GROUP);
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[1].value, "x");
    }

    #[test]
    fn test_all_values_missing_yields_single_sentinel_group() {
        let rows = vec![((), None::<String>), ((), None)];
        let dist = distribution(&rows, |(_, v)| v.clone());
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].value, UNKNOWN_GROUP);
        assert_eq!(dist[0].count, 2);
    }

    #[test]
    fn test_overview() {
        let kpis = overview(&sample());
        assert_eq!(kpis.total_competitors, 3);
        assert_eq!(kpis.top_rank, Some(1));
        assert_eq!(kpis.highest_points, Some(100));
        assert_eq!(kpis.countries_represented, 2);
    }

    #[test]
    fn test_everything_tolerates_empty_input() {
        let empty: Vec<CompetitorRanking> = Vec::new();

        assert!(top_n_by_points(&empty, 10).is_empty());
        assert!(top_n_by_activity(&empty, 5).is_empty());
        assert!(sum_points_by_country(&empty).is_empty());
        assert!(count_by_country(&empty).is_empty());
        assert!(movement_distribution(&empty).is_empty());

        let kpis = overview(&empty);
        assert_eq!(kpis.total_competitors, 0);
        assert_eq!(kpis.top_rank, None);
        assert_eq!(kpis.highest_points, None);
        assert_eq!(kpis.countries_represented, 0);
    }
}
