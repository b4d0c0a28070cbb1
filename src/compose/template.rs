//! Template loading and fragment extraction
//!
//! The template is a hand-drawn image laid out as a 3x2 grid of square cells.
//! Five of the cells hold the canonical corner shapes every wall tile is built
//! from; the sixth (bottom right) is ignored.

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use image::{RgbImage, imageops};
use std::path::Path;

/// Template grid width in cells
pub const TEMPLATE_COLUMNS: u32 = 3;
/// Template grid height in cells
pub const TEMPLATE_ROWS: u32 = 2;

/// One of the five corner shapes cut from the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Top row, first cell
    A,
    /// Top row, second cell
    B,
    /// Top row, third cell
    C,
    /// Bottom row, first cell
    D,
    /// Bottom row, second cell
    E,
}

impl Fragment {
    /// All fragments in template order
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Grid cell `(column, row)` the fragment is cut from
    pub const fn cell(self) -> (u32, u32) {
        match self {
            Self::A => (0, 0),
            Self::B => (1, 0),
            Self::C => (2, 0),
            Self::D => (0, 1),
            Self::E => (1, 1),
        }
    }
}

/// The five fragments of a template, immutable for the whole run
#[derive(Debug, Clone)]
pub struct TemplateFragments {
    unit_size: u32,
    a: RgbImage,
    b: RgbImage,
    c: RgbImage,
    d: RgbImage,
    e: RgbImage,
}

impl TemplateFragments {
    /// Cut the fragments out of an in-memory template
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `unit_size` is zero, or so large the template size overflows
    /// - The template is smaller than 3x2 cells of `unit_size`
    pub fn from_template(template: &RgbImage, unit_size: u32) -> Result<Self> {
        if unit_size == 0 {
            return Err(invalid_parameter(
                "unit_size",
                &unit_size,
                &"must be at least 1 pixel",
            ));
        }

        let required = unit_size
            .checked_mul(TEMPLATE_COLUMNS)
            .zip(unit_size.checked_mul(TEMPLATE_ROWS))
            .ok_or_else(|| {
                invalid_parameter("unit_size", &unit_size, &"template size overflows u32")
            })?;
        if template.width() < required.0 || template.height() < required.1 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "template is {}x{}, need at least {}x{} for unit size {unit_size}",
                    template.width(),
                    template.height(),
                    required.0,
                    required.1
                ),
            });
        }

        let cut = |fragment: Fragment| {
            let (col, row) = fragment.cell();
            imageops::crop_imm(
                template,
                col * unit_size,
                row * unit_size,
                unit_size,
                unit_size,
            )
            .to_image()
        };

        Ok(Self {
            unit_size,
            a: cut(Fragment::A),
            b: cut(Fragment::B),
            c: cut(Fragment::C),
            d: cut(Fragment::D),
            e: cut(Fragment::E),
        })
    }

    /// Load a template image from disk and cut its fragments
    ///
    /// The image is converted to 8-bit RGB.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if the
    /// template is too small for `unit_size`
    pub fn from_png_file<P: AsRef<Path>>(path: P, unit_size: u32) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let template = image::open(&path_buf)
            .map_err(|e| AlgorithmError::ImageLoad {
                path: path_buf,
                source: e,
            })?
            .to_rgb8();
        Self::from_template(&template, unit_size)
    }

    /// Edge length of each fragment in pixels
    pub const fn unit_size(&self) -> u32 {
        self.unit_size
    }

    /// Borrow a fragment image
    pub const fn fragment(&self, fragment: Fragment) -> &RgbImage {
        match fragment {
            Fragment::A => &self.a,
            Fragment::B => &self.b,
            Fragment::C => &self.c,
            Fragment::D => &self.d,
            Fragment::E => &self.e,
        }
    }
}
