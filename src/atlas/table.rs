//! C# lookup table emission
//!
//! The game looks up wall sprites through `TileNumbers.numbers[mask]`, so the
//! emitted array must hold exactly one entry per mask in ascending order.

use crate::atlas::dedup::Deduplicator;
use crate::compose::mask::{MASK_COUNT, NeighborMask};
use crate::io::error::{AlgorithmError, Result};
use std::fmt::Write;

/// Atlas index of every mask's tile, ordered by mask
///
/// # Errors
///
/// Returns [`AlgorithmError::MissingTile`] for the first mask whose tile was
/// never added
pub fn table_entries(deduplicator: &Deduplicator) -> Result<Vec<usize>> {
    NeighborMask::all()
        .map(|mask| {
            let name = mask.tile_name();
            deduplicator
                .index_of(&name)
                .ok_or(AlgorithmError::MissingTile { name })
        })
        .collect()
}

/// Render the `TileNumbers` class source for ordered table entries
///
/// # Errors
///
/// Returns an error if the number of entries is not one per mask, or if an
/// index does not fit the table's `ushort` element type
pub fn render_table(entries: &[usize]) -> Result<String> {
    if entries.len() != MASK_COUNT {
        return Err(AlgorithmError::InvalidSourceData {
            reason: format!(
                "lookup table needs {MASK_COUNT} entries, got {}",
                entries.len()
            ),
        });
    }

    let mut out = String::new();
    out.push_str("public static class TileNumbers {\n");
    out.push_str("    public static ushort[] numbers = new ushort[] {\n");
    for &index in entries {
        let number = u16::try_from(index).map_err(|e| AlgorithmError::InvalidSourceData {
            reason: format!("tile index {index} does not fit in a ushort: {e}"),
        })?;
        // Writing to a String cannot fail
        let _ = writeln!(out, "        {number},");
    }
    out.push_str("    };\n");
    out.push_str("}\n");
    Ok(out)
}
