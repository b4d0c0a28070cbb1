//! Pipeline constants and runtime configuration defaults

// Template settings
/// Edge length of one template fragment in pixels
pub const DEFAULT_UNIT_SIZE: u32 = 8;

// Atlas settings
/// Edge length of the square atlas in pixels
pub const DEFAULT_ATLAS_SIZE: u32 = 128;
/// Edge length of one atlas slot; generated tiles are twice the unit size
pub const DEFAULT_TILE_SIZE: u32 = DEFAULT_UNIT_SIZE * 2;

// File naming
/// Prefix shared by generated and deduplicated tile files
pub const TILE_NAME_PREFIX: &str = "Wall_";
/// Extension of every image read or written
pub const IMAGE_EXTENSION: &str = "png";
/// File name of the emitted lookup table
pub const TABLE_FILE_NAME: &str = "TileNumbers.cs";

// Default locations, relative to the working directory
/// Template read by the generator
pub const DEFAULT_TEMPLATE_PATH: &str = "Sources/Template.png";
/// Directory the generator writes to and the fuser reads from
pub const DEFAULT_TILES_DIR: &str = "WallTiles";
/// Directory receiving deduplicated tiles
pub const DEFAULT_WALLS_DIR: &str = "Assets/Walls";
/// Directory receiving the lookup table
pub const DEFAULT_TABLE_DIR: &str = "Assets";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
