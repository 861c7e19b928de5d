//! # Baseline
//!
//! Backend for a tennis rankings dashboard: filters, aggregates, and
//! serves competitor ranking tables scraped into a JSONL data lake.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (rankings, competitions, venues, filters)
//! - **store**: Filesystem data lake operations (JSONL tables, snapshots)
//! - **query**: Filtering, aggregation, and join operators over loaded tables
//! - **api**: REST API endpoints
//! - **export**: CSV export of filtered relations
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod export;
pub mod models;
pub mod query;
pub mod store;

pub use models::*;
