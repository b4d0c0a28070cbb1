//! Fixed-grid atlas layout and packing

use crate::atlas::dedup::{Assignment, Deduplicator};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use image::{RgbImage, imageops};

/// Square atlas divided into square tile slots, filled row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    atlas_size: u32,
    tile_size: u32,
}

impl AtlasLayout {
    /// Create a layout for an `atlas_size` square atlas of `tile_size` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero or the tile does not fit in
    /// the atlas
    pub fn new(atlas_size: u32, tile_size: u32) -> Result<Self> {
        if atlas_size == 0 {
            return Err(invalid_parameter("atlas_size", &atlas_size, &"must be positive"));
        }
        if tile_size == 0 {
            return Err(invalid_parameter("tile_size", &tile_size, &"must be positive"));
        }
        if tile_size > atlas_size {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &format!("larger than atlas size {atlas_size}"),
            ));
        }
        Ok(Self {
            atlas_size,
            tile_size,
        })
    }

    /// Atlas edge length in pixels
    pub const fn atlas_size(&self) -> u32 {
        self.atlas_size
    }

    /// Tile edge length in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Slots per atlas row
    pub const fn tiles_per_row(&self) -> u32 {
        self.atlas_size / self.tile_size
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        let per_row = self.tiles_per_row() as usize;
        per_row * per_row
    }

    /// Top-left pixel of slot `index`
    pub const fn slot_origin(&self, index: usize) -> (u32, u32) {
        let per_row = self.tiles_per_row() as usize;
        let row = (index / per_row) as u32;
        let column = (index % per_row) as u32;
        (column * self.tile_size, row * self.tile_size)
    }
}

/// Accumulates deduplicated tiles into an atlas image
#[derive(Debug)]
pub struct AtlasBuilder {
    layout: AtlasLayout,
    atlas: RgbImage,
    deduplicator: Deduplicator,
    unique_tiles: Vec<RgbImage>,
}

impl AtlasBuilder {
    /// Start an empty atlas
    pub fn new(layout: AtlasLayout) -> Self {
        Self {
            layout,
            atlas: RgbImage::new(layout.atlas_size(), layout.atlas_size()),
            deduplicator: Deduplicator::new(layout.capacity()),
            unique_tiles: Vec::new(),
        }
    }

    /// Add a named tile, packing it into the next free slot if its content is new
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile is not `tile_size` square
    /// - The tile is new and the atlas is full
    pub fn add(&mut self, name: &str, tile: RgbImage) -> Result<Assignment> {
        let size = self.layout.tile_size();
        if tile.dimensions() != (size, size) {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "tile '{name}' is {}x{}, expected {size}x{size}",
                    tile.width(),
                    tile.height()
                ),
            });
        }

        let assignment = self.deduplicator.insert(name, &tile)?;
        if assignment.is_new {
            let (x, y) = self.layout.slot_origin(assignment.index);
            imageops::replace(&mut self.atlas, &tile, i64::from(x), i64::from(y));
            self.unique_tiles.push(tile);
        }
        Ok(assignment)
    }

    /// Packed atlas image
    pub const fn atlas(&self) -> &RgbImage {
        &self.atlas
    }

    /// Unique tiles in index order
    pub fn unique_tiles(&self) -> &[RgbImage] {
        &self.unique_tiles
    }

    /// Name to index assignments
    pub const fn deduplicator(&self) -> &Deduplicator {
        &self.deduplicator
    }
}
