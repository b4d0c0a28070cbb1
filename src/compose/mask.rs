//! Eight-bit neighbor adjacency masks and their tile file names

use crate::io::configuration::TILE_NAME_PREFIX;
use std::fmt;

/// Number of distinct neighbor masks, one wall tile per mask
pub const MASK_COUNT: usize = 256;

/// Adjacency pattern of a wall tile
///
/// Each bit flags a neighboring wall in one of eight directions. Bit positions
/// 0 through 7 form a fixed convention shared with the corner selector table;
/// see [`crate::compose::assembler::CORNER_SELECTORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NeighborMask(pub u8);

impl NeighborMask {
    /// Mask with no neighbors present
    pub const EMPTY: Self = Self(0);
    /// Mask with all eight neighbors present
    pub const FULL: Self = Self(u8::MAX);

    /// Test the bit at `position`
    ///
    /// Positions outside 0..8 read as absent.
    pub const fn bit(self, position: u8) -> bool {
        position < 8 && (self.0 >> position) & 1 == 1
    }

    /// Every mask in ascending order
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }

    /// File stem used for the generated tile, e.g. `Wall_00010110`
    pub fn tile_name(self) -> String {
        format!("{TILE_NAME_PREFIX}{:08b}", self.0)
    }

    /// Parse a tile file stem back into its mask
    ///
    /// Returns `None` unless the stem is the prefix followed by exactly
    /// eight binary digits.
    pub fn from_tile_name(name: &str) -> Option<Self> {
        let digits = name.strip_prefix(TILE_NAME_PREFIX)?;
        if digits.len() != 8 || !digits.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        u8::from_str_radix(digits, 2).ok().map(Self)
    }
}

impl From<u8> for NeighborMask {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}
