//! Wall tile assembly from four corner quadrants

use crate::compose::corner::{Corner, CornerSelector, Rotation, compose_corner};
use crate::compose::mask::NeighborMask;
use crate::compose::template::TemplateFragments;
use image::{RgbImage, imageops};

/// Mask bits feeding each corner, in assembly order
///
/// Every corner reads two side neighbors and the diagonal between them. The
/// top-left entry uses the template shapes as drawn; the others rotate them
/// into place.
pub const CORNER_SELECTORS: [CornerSelector; 4] = [
    CornerSelector {
        corner: Corner::TopLeft,
        left_bit: 4,
        diagonal_bit: 7,
        up_bit: 6,
        rotation: Rotation::None,
    },
    CornerSelector {
        corner: Corner::TopRight,
        left_bit: 6,
        diagonal_bit: 5,
        up_bit: 3,
        rotation: Rotation::Ccw270,
    },
    CornerSelector {
        corner: Corner::BottomRight,
        left_bit: 3,
        diagonal_bit: 0,
        up_bit: 1,
        rotation: Rotation::Half,
    },
    CornerSelector {
        corner: Corner::BottomLeft,
        left_bit: 1,
        diagonal_bit: 2,
        up_bit: 4,
        rotation: Rotation::Ccw90,
    },
];

/// Assemble the `2s x 2s` wall tile for `mask`
pub fn assemble_tile(fragments: &TemplateFragments, mask: NeighborMask) -> RgbImage {
    let unit = fragments.unit_size();
    let mut tile = RgbImage::new(unit * 2, unit * 2);

    for selector in &CORNER_SELECTORS {
        let quadrant = compose_corner(fragments, mask, selector);
        let (x, y) = selector.corner.origin(unit);
        imageops::replace(&mut tile, &quadrant, i64::from(x), i64::from(y));
    }

    tile
}

/// Assemble every wall tile in ascending mask order
pub fn assemble_all(
    fragments: &TemplateFragments,
) -> impl Iterator<Item = (NeighborMask, RgbImage)> + '_ {
    NeighborMask::all().map(move |mask| (mask, assemble_tile(fragments, mask)))
}
