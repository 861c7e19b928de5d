//! Spreadsheet export of a ranking relation.
//!
//! The exported file is a faithful row/column dump of the filtered
//! relation: one row per competitor, header names matching the model
//! field names.

use std::io;

use thiserror::Error;

use crate::models::CompetitorRanking;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write the relation as CSV to any writer.
pub fn write_rankings_csv<W: io::Write>(
    relation: &[CompetitorRanking],
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in relation {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render the relation as a CSV string (used by the export endpoint).
///
/// An empty relation still produces the header row, so a spreadsheet
/// opened from an empty filter result shows its columns.
pub fn rankings_to_csv(relation: &[CompetitorRanking]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if relation.is_empty() {
        wtr.write_record([
            "name",
            "country",
            "rank",
            "points",
            "movement",
            "competitions_played",
        ])?;
    }
    for row in relation {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
