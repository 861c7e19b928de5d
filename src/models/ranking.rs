//! Competitor ranking model.

use serde::{Deserialize, Serialize};

/// Direction a competitor's rank moved since the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Up,
    Down,
    Same,
    /// Catch-all for values the feed adds later. Grouped under the
    /// "unknown" sentinel in distributions instead of failing the load.
    #[serde(other)]
    #[default]
    Unknown,
}

impl Movement {
    /// Label used as a distribution key.
    pub fn label(&self) -> &'static str {
        match self {
            Movement::Up => "up",
            Movement::Down => "down",
            Movement::Same => "same",
            Movement::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One competitor with their current ranking snapshot.
///
/// Unique by competitor identity, not by rank: ties in rank are
/// possible in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRanking {
    /// Competitor display name
    pub name: String,

    /// Country the competitor represents
    pub country: String,

    /// Current world rank (1 = best)
    pub rank: u32,

    /// Ranking points
    pub points: u64,

    /// Rank movement since the previous snapshot
    #[serde(default)]
    pub movement: Movement,

    /// Competitions played this season
    #[serde(default)]
    pub competitions_played: u32,
}

impl CompetitorRanking {
    pub fn new(name: impl Into<String>, country: impl Into<String>, rank: u32, points: u64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            rank,
            points,
            movement: Movement::default(),
            competitions_played: 0,
        }
    }

    /// Builder method to set rank movement.
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Builder method to set competitions played.
    pub fn with_competitions_played(mut self, count: u32) -> Self {
        self.competitions_played = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_builder() {
        let row = CompetitorRanking::new("Novak Djokovic", "SRB", 1, 9945)
            .with_movement(Movement::Same)
            .with_competitions_played(18);

        assert_eq!(row.name, "Novak Djokovic");
        assert_eq!(row.rank, 1);
        assert_eq!(row.movement, Movement::Same);
        assert_eq!(row.competitions_played, 18);
    }

    #[test]
    fn test_movement_serialization() {
        assert_eq!(serde_json::to_string(&Movement::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Movement::Down).unwrap(), "\"down\"");

        let m: Movement = serde_json::from_str("\"same\"").unwrap();
        assert_eq!(m, Movement::Same);
    }

    #[test]
    fn test_movement_unknown_value_decodes() {
        // A new feed value must not fail the load.
        let m: Movement = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(m, Movement::Unknown);
        assert_eq!(m.label(), "unknown");
    }

    #[test]
    fn test_ranking_roundtrip() {
        let row = CompetitorRanking::new("Iga Swiatek", "POL", 1, 10715)
            .with_movement(Movement::Up)
            .with_competitions_played(16);

        let json = serde_json::to_string(&row).unwrap();
        let back: CompetitorRanking = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn test_ranking_missing_optional_fields() {
        // movement and competitions_played default when the feed omits them
        let row: CompetitorRanking =
            serde_json::from_str(r#"{"name":"A","country":"USA","rank":3,"points":100}"#).unwrap();
        assert_eq!(row.movement, Movement::Unknown);
        assert_eq!(row.competitions_played, 0);
    }
}
