pub mod competitions;
pub mod countries;
pub mod meta;
pub mod rankings;
pub mod venues;
