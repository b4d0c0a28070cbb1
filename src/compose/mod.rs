//! Wall tile composition from template fragments
//!
//! Pure image construction: nothing here touches the filesystem except
//! [`template::TemplateFragments::from_png_file`].

/// Tile assembly from corner quadrants
pub mod assembler;
/// Corner quadrant lookup and rotation
pub mod corner;
/// Neighbor masks and tile naming
pub mod mask;
/// Template loading and fragment extraction
pub mod template;

pub use assembler::{assemble_all, assemble_tile};
pub use mask::NeighborMask;
pub use template::TemplateFragments;
