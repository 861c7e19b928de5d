//! Competition and category models.

use serde::{Deserialize, Serialize};

/// A competition as supplied by the data source.
///
/// Many-to-one with [`Category`] via `category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub competition_name: String,

    /// Foreign key into the categories table
    pub category_id: String,

    /// Competition type (e.g. "singles", "doubles")
    #[serde(rename = "type")]
    pub comp_type: String,

    /// Gender bracket (e.g. "men", "women", "mixed")
    pub gender: String,
}

/// A competition category (e.g. "ATP", "WTA", "Challenger").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

/// Output record of the competitions↔categories join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionWithCategory {
    pub competition_name: String,
    #[serde(rename = "type")]
    pub comp_type: String,
    pub gender: String,
    pub category_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_type_field_rename() {
        // "type" is a keyword; the wire name must survive the rename
        let c: Competition = serde_json::from_str(
            r#"{"competition_name":"Wimbledon","category_id":"10","type":"singles","gender":"men"}"#,
        )
        .unwrap();
        assert_eq!(c.comp_type, "singles");

        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"type\":\"singles\""));
    }

    #[test]
    fn test_joined_record_serialization() {
        let row = CompetitionWithCategory {
            competition_name: "US Open".to_string(),
            comp_type: "singles".to_string(),
            gender: "women".to_string(),
            category_name: "WTA".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: CompetitionWithCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
