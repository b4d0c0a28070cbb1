//! Exact-content tile deduplication
//!
//! Tiles are numbered in first-seen order. Two tiles share a number only when
//! their dimensions and every pixel byte match.

use crate::io::error::{AlgorithmError, Result};
use image::RgbImage;
use std::collections::HashMap;

/// Exact pixel content of a tile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ContentKey {
    /// Key for an image's current content
    pub fn of(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.as_raw().clone(),
        }
    }
}

/// Outcome of adding one named tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Index shared by every tile with the same content
    pub index: usize,
    /// Whether this tile introduced new content
    pub is_new: bool,
}

/// Assigns stable indices to named tiles, merging identical content
#[derive(Debug)]
pub struct Deduplicator {
    capacity: usize,
    index_by_content: HashMap<ContentKey, usize>,
    index_by_name: HashMap<String, usize>,
}

impl Deduplicator {
    /// Create a deduplicator accepting at most `capacity` unique tiles
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index_by_content: HashMap::new(),
            index_by_name: HashMap::new(),
        }
    }

    /// Record a named tile and return its index
    ///
    /// Re-inserting a name overwrites its previous assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::AtlasCapacityExceeded`] if the tile has new
    /// content and all slots are taken. Nothing is recorded in that case.
    pub fn insert(&mut self, name: &str, image: &RgbImage) -> Result<Assignment> {
        let key = ContentKey::of(image);

        let assignment = if let Some(&index) = self.index_by_content.get(&key) {
            Assignment {
                index,
                is_new: false,
            }
        } else {
            let index = self.index_by_content.len();
            if index >= self.capacity {
                return Err(AlgorithmError::AtlasCapacityExceeded {
                    capacity: self.capacity,
                    name: name.to_string(),
                });
            }
            self.index_by_content.insert(key, index);
            Assignment {
                index,
                is_new: true,
            }
        };

        self.index_by_name
            .insert(name.to_string(), assignment.index);
        Ok(assignment)
    }

    /// Number of distinct tiles seen so far
    pub fn unique_count(&self) -> usize {
        self.index_by_content.len()
    }

    /// Maximum number of distinct tiles
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index assigned to `name`, if it was inserted
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

}
