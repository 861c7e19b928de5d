//! User-chosen filter predicates for the rankings table.

use serde::{Deserialize, Serialize};

/// Sentinel country value meaning "no country filter".
///
/// Matches the dropdown's first entry in the dashboard UI; never a
/// real ISO country value in the feed.
pub const ALL_COUNTRIES: &str = "All";

/// Inclusive rank range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRange {
    pub min: u32,
    pub max: u32,
}

impl RankRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rank: u32) -> bool {
        rank >= self.min && rank <= self.max
    }
}

impl Default for RankRange {
    /// The full range: applied when the caller doesn't restrict ranks.
    fn default() -> Self {
        Self {
            min: 1,
            max: u32::MAX,
        }
    }
}

/// The set of predicates a dashboard session applies to the
/// competitor-ranking relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact country match; `None` or [`ALL_COUNTRIES`] keeps all rows
    pub country: Option<String>,

    /// Inclusive rank window, always applied
    #[serde(default)]
    pub rank_range: RankRange,

    /// Case-insensitive substring match on the competitor name;
    /// empty or absent is a no-op
    pub name_query: Option<String>,
}

impl FilterSpec {
    /// A spec that keeps every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_rank_range(mut self, min: u32, max: u32) -> Self {
        self.rank_range = RankRange::new(min, max);
        self
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = Some(query.into());
        self
    }

    /// Whether the country predicate actually restricts anything.
    pub fn country_filter(&self) -> Option<&str> {
        match self.country.as_deref() {
            None | Some(ALL_COUNTRIES) => None,
            Some(c) => Some(c),
        }
    }

    /// Whether the name predicate actually restricts anything.
    pub fn name_filter(&self) -> Option<&str> {
        match self.name_query.as_deref() {
            None | Some("") => None,
            Some(q) => Some(q),
        }
    }
}
