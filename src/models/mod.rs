//! Core data models for the analytics backend.

mod competition;
mod filter;
mod ranking;
mod venue;

pub use competition::*;
pub use filter::*;
pub use ranking::*;
pub use venue::*;
