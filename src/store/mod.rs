//! Local table store.
//!
//! The dashboards read five tables from a local data directory, one
//! JSONL file per table. The store is the only I/O boundary: handlers
//! load a [`Snapshot`] per request and hand plain relations to the
//! query layer.

mod jsonl;
mod snapshot;

pub use jsonl::*;
pub use snapshot::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur reading or writing tables.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row that doesn't match the table's record type. Schema
    /// problems fail the load instead of surfacing later as a missing
    /// key at query time.
    #[error("schema mismatch in {table} line {line}: {source}")]
    SchemaMismatch {
        table: String,
        line: usize,
        source: serde_json::Error,
    },
}

/// Configuration for store paths.
#[derive(Debug, Clone)]
pub struct TableStore {
    pub data_dir: PathBuf,
}

impl TableStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.data_dir.join("tables")
    }

    pub fn table_path(&self, table: TableKind) -> PathBuf {
        self.tables_dir().join(table.filename())
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// The five tables the dashboards consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    CompetitorRankings,
    Competitions,
    Categories,
    Venues,
    Complexes,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::CompetitorRankings,
        TableKind::Competitions,
        TableKind::Categories,
        TableKind::Venues,
        TableKind::Complexes,
    ];

    /// Get the filename for this table.
    pub fn filename(&self) -> &'static str {
        match self {
            TableKind::CompetitorRankings => "competitor_rankings.jsonl",
            TableKind::Competitions => "competitions.jsonl",
            TableKind::Categories => "categories.jsonl",
            TableKind::Venues => "venues.jsonl",
            TableKind::Complexes => "complexes.jsonl",
        }
    }

    /// Logical table name, as the data source contract spells it.
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::CompetitorRankings => "competitors_joined_rankings",
            TableKind::Competitions => "competitions",
            TableKind::Categories => "categories",
            TableKind::Venues => "venues",
            TableKind::Complexes => "complexes",
        }
    }
}
