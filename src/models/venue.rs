//! Venue and complex models.

use serde::{Deserialize, Serialize};

/// A tournament venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_name: String,
    pub city_name: String,
    pub country_name: String,
    pub timezone: String,
}

/// A sports complex record.
///
/// The dashboard displays complexes verbatim, so the shape is not
/// pinned down here: whatever the source supplies is passed through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Complex(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_roundtrip() {
        let v = Venue {
            venue_name: "Centre Court".to_string(),
            city_name: "London".to_string(),
            country_name: "Great Britain".to_string(),
            timezone: "Europe/London".to_string(),
        };

        let json = serde_json::to_string(&v).unwrap();
        let back: Venue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn test_complex_is_passthrough() {
        let raw = r#"{"complex_id":"c1","complex_name":"Melbourne Park","courts":12}"#;
        let c: Complex = serde_json::from_str(raw).unwrap();

        // Unknown fields survive a roundtrip untouched
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["courts"], 12);
        assert_eq!(back["complex_name"], "Melbourne Park");
    }
}
