//! Per-request snapshot of all dashboard tables.

use crate::models::{Category, Competition, CompetitorRanking, Complex, Venue};

use super::{JsonlReader, StoreError, TableKind, TableStore};

/// All five relations, fetched once per dashboard request and threaded
/// through the query layer as plain arguments. There is no process-wide
/// cache: concurrent sessions each load their own snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub competitor_rankings: Vec<CompetitorRanking>,
    pub competitions: Vec<Competition>,
    pub categories: Vec<Category>,
    pub venues: Vec<Venue>,
    pub complexes: Vec<Complex>,
}

impl Snapshot {
    /// Load every table from the store. Missing files load as empty
    /// relations; schema mismatches fail the whole load.
    pub fn load(store: &TableStore) -> Result<Self, StoreError> {
        Ok(Self {
            competitor_rankings: JsonlReader::for_table(store, TableKind::CompetitorRankings)
                .read_all()?,
            competitions: JsonlReader::for_table(store, TableKind::Competitions).read_all()?,
            categories: JsonlReader::for_table(store, TableKind::Categories).read_all()?,
            venues: JsonlReader::for_table(store, TableKind::Venues).read_all()?,
            complexes: JsonlReader::for_table(store, TableKind::Complexes).read_all()?,
        })
    }

    /// Row counts per table, in [`TableKind::ALL`] order.
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (
                TableKind::CompetitorRankings.name(),
                self.competitor_rankings.len(),
            ),
            (TableKind::Competitions.name(), self.competitions.len()),
            (TableKind::Categories.name(), self.categories.len()),
            (TableKind::Venues.name(), self.venues.len()),
            (TableKind::Complexes.name(), self.complexes.len()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.table_counts().iter().all(|(_, n)| *n == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonlWriter;
    use tempfile::TempDir;

    #[test]
    fn test_load_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = TableStore::new(temp_dir.path().to_path_buf());

        let snapshot = Snapshot::load(&store).unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.competitor_rankings.is_empty());
    }

    #[test]
    fn test_load_reads_all_tables() {
        let temp_dir = TempDir::new().unwrap();
        let store = TableStore::new(temp_dir.path().to_path_buf());

        JsonlWriter::for_table(&store, TableKind::CompetitorRankings)
            .write_all(&[
                CompetitorRanking::new("A", "USA", 1, 100),
                CompetitorRanking::new("B", "FRA", 2, 90),
            ])
            .unwrap();
        JsonlWriter::for_table(&store, TableKind::Categories)
            .write_all(&[Category {
                category_id: "10".to_string(),
                category_name: "ATP".to_string(),
            }])
            .unwrap();

        let snapshot = Snapshot::load(&store).unwrap();
        assert_eq!(snapshot.competitor_rankings.len(), 2);
        assert_eq!(snapshot.categories.len(), 1);
        assert!(snapshot.competitions.is_empty());
        assert!(!snapshot.is_empty());

        let counts = snapshot.table_counts();
        assert_eq!(counts[0], ("competitors_joined_rankings", 2));
        assert_eq!(counts[2], ("categories", 1));
    }
}
