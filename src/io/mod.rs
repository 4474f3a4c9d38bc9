//! File IO: curve JSON and samples CSV.

pub mod curve;
pub mod export;
