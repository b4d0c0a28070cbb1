//! Tests for template validation and fragment extraction

#[cfg(test)]
mod tests {
    use crate::{CELL_COLORS, sample_template};
    use image::{Rgb, RgbImage};
    use walltile::AlgorithmError;
    use walltile::compose::template::{Fragment, TemplateFragments};

    // Tests fragments are cut from the documented grid cells
    // Verified by cutting D from the top row
    #[test]
    fn test_fragments_match_cells() {
        let unit = 4;
        let fragments = TemplateFragments::from_template(&sample_template(unit), unit)
            .unwrap_or_else(|e| unreachable!("template should be valid: {e}"));

        assert_eq!(fragments.unit_size(), unit);
        for (cell, fragment) in Fragment::ALL.iter().enumerate() {
            let image = fragments.fragment(*fragment);
            assert_eq!(image.dimensions(), (unit, unit));
            assert_eq!(*image.get_pixel(0, 0), Rgb([255, 255, 255]));
            assert_eq!(*image.get_pixel(1, 1), Rgb(CELL_COLORS[cell]));
        }
    }

    // Tests the unused sixth cell never becomes a fragment
    // Verified by cutting E from the third column
    #[test]
    fn test_unused_cell_ignored() {
        let unit = 4;
        let fragments = TemplateFragments::from_template(&sample_template(unit), unit)
            .unwrap_or_else(|e| unreachable!("template should be valid: {e}"));

        for fragment in Fragment::ALL {
            assert_ne!(
                *fragments.fragment(fragment).get_pixel(1, 1),
                Rgb(CELL_COLORS[5])
            );
        }
    }

    // Tests oversized templates are accepted and cropped from the origin
    // Verified by requiring an exact template size
    #[test]
    fn test_larger_template_accepted() {
        let template = RgbImage::new(40, 40);
        let fragments = TemplateFragments::from_template(&template, 8);

        assert!(fragments.is_ok());
    }

    // Tests a template smaller than 3x2 cells is rejected
    // Verified by skipping the width check
    #[test]
    fn test_small_template_rejected() {
        let template = RgbImage::new(23, 16);
        let result = TemplateFragments::from_template(&template, 8);

        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests zero unit size is rejected
    // Verified by removing the zero guard
    #[test]
    fn test_zero_unit_size_rejected() {
        let result = TemplateFragments::from_template(&sample_template(4), 0);

        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "unit_size",
                ..
            })
        ));
    }

    // Tests loading a missing template reports its path
    // Verified by reporting an unknown path
    #[test]
    fn test_missing_template_file() {
        let result = TemplateFragments::from_png_file("does/not/exist/Template.png", 8);

        match result {
            Err(AlgorithmError::ImageLoad { path, .. }) => {
                assert!(path.ends_with("Template.png"));
            }
            _ => unreachable!("expected an image load error"),
        }
    }

    // Tests templates round-trip through PNG on disk
    // Verified by loading the template as grayscale
    #[test]
    fn test_load_from_png_file() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("tempdir: {e}"));
        let path = dir.path().join("Template.png");
        sample_template(8)
            .save(&path)
            .unwrap_or_else(|e| unreachable!("save: {e}"));

        let fragments = TemplateFragments::from_png_file(&path, 8)
            .unwrap_or_else(|e| unreachable!("load: {e}"));

        assert_eq!(
            *fragments.fragment(Fragment::E).get_pixel(3, 3),
            Rgb(CELL_COLORS[4])
        );
    }

    // Tests a unit size whose template dimensions overflow is rejected
    // Verified by multiplying the unit size without overflow checks
    #[test]
    fn test_overflowing_unit_size_rejected() {
        let result = TemplateFragments::from_template(&RgbImage::new(3, 2), 2_000_000_000);

        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "unit_size",
                ..
            })
        ));
    }
}
