//! Filtering-and-aggregation query layer.
//!
//! Turns the raw ranking relation into the derived views the
//! dashboard renders:
//! - Filtered leaderboards ([`filter`])
//! - Top-N leaderboards, country aggregates, distributions, KPIs
//!   ([`aggregate`])
//! - The competitions↔categories join ([`join`])
//!
//! Every function here is a pure, synchronous function over immutable
//! in-memory relations. An empty relation is always a valid input and
//! yields an empty result, never an error.

pub mod aggregate;
pub mod filter;
pub mod join;

pub use aggregate::*;
pub use filter::*;
pub use join::*;

use thiserror::Error;

/// Errors the query layer can surface to the caller.
///
/// All of these are recoverable at the boundary that detects them and
/// are reported as structured results, never panics.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Rank range with min above max, rejected at the filter boundary
    /// rather than silently returning an empty relation.
    #[error("invalid filter spec: rank range min {min} is greater than max {max}")]
    InvalidFilterSpec { min: u32, max: u32 },

    /// A competition references a category id absent from the
    /// category set (strict join mode only).
    #[error("competition \"{competition}\" references missing category id {category_id}")]
    MissingJoinKey {
        competition: String,
        category_id: String,
    },
}
