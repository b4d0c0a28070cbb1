//! Atlas fusing: deduplication, grid packing and lookup table output

/// Exact-content deduplication
pub mod dedup;
/// Grid layout and atlas packing
pub mod layout;
/// Lookup table source generation
pub mod table;

pub use dedup::Deduplicator;
pub use layout::{AtlasBuilder, AtlasLayout};
