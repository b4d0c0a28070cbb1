/// Command-line parsing and stage dispatch
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG loading and saving
pub mod image;
/// Stage drivers for generating and fusing tiles
pub mod pipeline;
/// Progress display
pub mod progress;
