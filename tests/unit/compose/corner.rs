//! Tests for corner index packing, fragment lookup and rotation

#[cfg(test)]
mod tests {
    use crate::sample_template;
    use image::{RgbImage, imageops};
    use walltile::compose::corner::{
        CORNER_FRAGMENTS, Corner, CornerSelector, Rotation, compose_corner, corner_index,
        fragment_for_index,
    };
    use walltile::compose::mask::NeighborMask;
    use walltile::compose::template::{Fragment, TemplateFragments};

    const TOP_LEFT: CornerSelector = CornerSelector {
        corner: Corner::TopLeft,
        left_bit: 4,
        diagonal_bit: 7,
        up_bit: 6,
        rotation: Rotation::None,
    };

    fn fragments() -> TemplateFragments {
        TemplateFragments::from_template(&sample_template(4), 4)
            .unwrap_or_else(|e| unreachable!("template should be valid: {e}"))
    }

    // Tests the lookup table holds exactly the eight documented entries
    // Verified by swapping the C and E entries
    #[test]
    fn test_corner_fragment_table() {
        assert_eq!(
            CORNER_FRAGMENTS,
            [
                Fragment::A,
                Fragment::D,
                Fragment::A,
                Fragment::D,
                Fragment::B,
                Fragment::C,
                Fragment::B,
                Fragment::E,
            ]
        );
    }

    // Tests symmetric indices share a fragment and lookups are stable
    // Verified by mapping index 2 to D
    #[test]
    fn test_symmetric_indices_share_fragment() {
        assert_eq!(fragment_for_index(0), Fragment::A);
        assert_eq!(fragment_for_index(2), Fragment::A);
        assert_eq!(fragment_for_index(1), fragment_for_index(3));
        assert_eq!(fragment_for_index(4), fragment_for_index(6));
        for index in 0..8 {
            assert_eq!(fragment_for_index(index), fragment_for_index(index));
        }
    }

    // Tests the left, diagonal and up bits land in positions 2, 1 and 0
    // Verified by swapping the left and up shifts
    #[test]
    fn test_corner_index_packing() {
        assert_eq!(corner_index(NeighborMask(0), &TOP_LEFT), 0);
        assert_eq!(corner_index(NeighborMask(1 << 4), &TOP_LEFT), 0b100);
        assert_eq!(corner_index(NeighborMask(1 << 7), &TOP_LEFT), 0b010);
        assert_eq!(corner_index(NeighborMask(1 << 6), &TOP_LEFT), 0b001);
        assert_eq!(corner_index(NeighborMask(0b1101_0000), &TOP_LEFT), 0b111);
        // Bits outside the selector are ignored
        assert_eq!(corner_index(NeighborMask(0b0010_1111), &TOP_LEFT), 0);
    }

    // Tests rotations turn counter-clockwise and are lossless
    // Verified by mapping Ccw90 to a clockwise rotation
    #[test]
    fn test_rotation_direction() {
        let mut image = RgbImage::new(4, 4);
        image.put_pixel(3, 0, image::Rgb([255, 0, 0]));

        // A counter-clockwise quarter turn moves the top-right pixel to the top-left
        let ccw = Rotation::Ccw90.apply(&image);
        assert_eq!(ccw.get_pixel(0, 0).0, [255, 0, 0]);

        let cw = Rotation::Ccw270.apply(&image);
        assert_eq!(cw.get_pixel(3, 3).0, [255, 0, 0]);

        let full_turn = Rotation::Ccw90.apply(&Rotation::Ccw270.apply(&image));
        assert_eq!(full_turn, image);
        assert_eq!(Rotation::Half.apply(&Rotation::Half.apply(&image)), image);
    }

    // Tests the composed corner is the selected fragment under the selector's rotation
    // Verified by ignoring the selector rotation
    #[test]
    fn test_compose_corner_selects_and_rotates() {
        let fragments = fragments();
        let selector = CornerSelector {
            rotation: Rotation::Half,
            ..TOP_LEFT
        };

        let corner = compose_corner(&fragments, NeighborMask(0b1101_0000), &selector);

        assert_eq!(corner, imageops::rotate180(fragments.fragment(Fragment::E)));
    }

    // Tests composing leaves the template fragments untouched
    // Verified by rotating the fragment in place
    #[test]
    fn test_compose_corner_is_pure() {
        let fragments = fragments();
        let before = fragments.fragment(Fragment::A).clone();

        let first = compose_corner(&fragments, NeighborMask(0), &TOP_LEFT);
        let second = compose_corner(&fragments, NeighborMask(0), &TOP_LEFT);

        assert_eq!(first, second);
        assert_eq!(fragments.fragment(Fragment::A), &before);
    }

    // Tests quadrant origins within a tile
    // Verified by swapping the bottom-left and top-right origins
    #[test]
    fn test_corner_origins() {
        assert_eq!(Corner::TopLeft.origin(8), (0, 0));
        assert_eq!(Corner::TopRight.origin(8), (8, 0));
        assert_eq!(Corner::BottomLeft.origin(8), (0, 8));
        assert_eq!(Corner::BottomRight.origin(8), (8, 8));
    }
}
