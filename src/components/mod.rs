pub mod chained;
pub mod direct;
pub mod entry;
pub mod open;
