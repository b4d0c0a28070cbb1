//! Corner quadrant selection and rotation

use crate::compose::mask::NeighborMask;
use crate::compose::template::{Fragment, TemplateFragments};
use image::{RgbImage, imageops};

/// Fragment chosen for each 3-bit corner index `(left << 2) | (diagonal << 1) | up`
///
/// Indices 0 and 2 share `A`, 1 and 3 share `D`, 4 and 6 share `B`: when a
/// side neighbor is missing the diagonal neighbor does not change the shape.
pub const CORNER_FRAGMENTS: [Fragment; 8] = [
    Fragment::A,
    Fragment::D,
    Fragment::A,
    Fragment::D,
    Fragment::B,
    Fragment::C,
    Fragment::B,
    Fragment::E,
];

/// Counter-clockwise rotation applied to a corner fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Unrotated
    None,
    /// Quarter turn counter-clockwise
    Ccw90,
    /// Half turn
    Half,
    /// Three quarter turns counter-clockwise, i.e. a quarter turn clockwise
    Ccw270,
}

impl Rotation {
    /// Rotate an image; exact for any image since only whole quarter turns are used
    pub fn apply(self, image: &RgbImage) -> RgbImage {
        // imageops rotates clockwise
        match self {
            Self::None => image.clone(),
            Self::Ccw90 => imageops::rotate270(image),
            Self::Half => imageops::rotate180(image),
            Self::Ccw270 => imageops::rotate90(image),
        }
    }
}

/// Quadrant of an assembled wall tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Upper left quadrant
    TopLeft,
    /// Upper right quadrant
    TopRight,
    /// Lower right quadrant
    BottomRight,
    /// Lower left quadrant
    BottomLeft,
}

impl Corner {
    /// Quadrant origin within a tile of `2 * unit_size` pixels
    pub const fn origin(self, unit_size: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (unit_size, 0),
            Self::BottomLeft => (0, unit_size),
            Self::BottomRight => (unit_size, unit_size),
        }
    }
}

/// Mask bits and rotation that drive one corner of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSelector {
    /// Quadrant this selector produces
    pub corner: Corner,
    /// Bit of the side neighbor that becomes the index's high bit
    pub left_bit: u8,
    /// Bit of the diagonal neighbor between the two sides
    pub diagonal_bit: u8,
    /// Bit of the other side neighbor, the index's low bit
    pub up_bit: u8,
    /// Rotation turning the canonical top-left shape into this corner
    pub rotation: Rotation,
}

/// Pack the selector's three mask bits into a 3-bit table index
pub const fn corner_index(mask: NeighborMask, selector: &CornerSelector) -> u8 {
    let left = mask.bit(selector.left_bit) as u8;
    let diagonal = mask.bit(selector.diagonal_bit) as u8;
    let up = mask.bit(selector.up_bit) as u8;
    (left << 2) | (diagonal << 1) | up
}

/// Fragment for a 3-bit corner index
///
/// Only the low three bits of `index` are used.
pub fn fragment_for_index(index: u8) -> Fragment {
    CORNER_FRAGMENTS
        .get(usize::from(index & 0b111))
        .copied()
        .unwrap_or(Fragment::E)
}

/// Build one rotated corner quadrant for `mask`
pub fn compose_corner(
    fragments: &TemplateFragments,
    mask: NeighborMask,
    selector: &CornerSelector,
) -> RgbImage {
    let fragment = fragment_for_index(corner_index(mask, selector));
    selector.rotation.apply(fragments.fragment(fragment))
}
