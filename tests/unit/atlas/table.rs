//! Tests for lookup table ordering and C# source output

#[cfg(test)]
mod tests {
    use crate::solid_tile;
    use walltile::AlgorithmError;
    use walltile::atlas::dedup::Deduplicator;
    use walltile::atlas::table::{render_table, table_entries};
    use walltile::compose::mask::NeighborMask;

    fn filled_deduplicator() -> Deduplicator {
        let mut dedup = Deduplicator::new(64);
        // Insert in descending order to show the table ignores insertion order
        for mask in NeighborMask::all().rev() {
            let tile = solid_tile(2, u32::from(mask.0 % 3));
            dedup
                .insert(&mask.tile_name(), &tile)
                .unwrap_or_else(|e| unreachable!("insert {mask}: {e}"));
        }
        dedup
    }

    // Tests entries follow ascending mask order
    // Verified by emitting entries in insertion order
    #[test]
    fn test_entries_in_mask_order() {
        let dedup = filled_deduplicator();
        let entries = table_entries(&dedup).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(entries.len(), 256);
        for mask in NeighborMask::all() {
            assert_eq!(
                Some(entries[usize::from(mask.0)]),
                dedup.index_of(&mask.tile_name())
            );
        }
    }

    // Tests a missing mask tile is reported by name
    // Verified by defaulting missing tiles to index 0
    #[test]
    fn test_missing_tile() {
        let mut dedup = Deduplicator::new(64);
        for mask in NeighborMask::all().filter(|mask| mask.0 != 0b0001_0000) {
            dedup
                .insert(&mask.tile_name(), &solid_tile(2, 0))
                .unwrap_or_else(|e| unreachable!("{e}"));
        }

        match table_entries(&dedup) {
            Err(AlgorithmError::MissingTile { name }) => assert_eq!(name, "Wall_00010000"),
            _ => unreachable!("expected a missing tile error"),
        }
    }

    // Tests the exact C# layout
    // Verified by dropping the trailing commas
    #[test]
    fn test_render_table_format() {
        let entries: Vec<usize> = (0..256).map(|i| i % 5).collect();
        let source = render_table(&entries).unwrap_or_else(|e| unreachable!("{e}"));
        let lines: Vec<&str> = source.lines().collect();

        assert_eq!(lines.len(), 256 + 4);
        assert_eq!(lines[0], "public static class TileNumbers {");
        assert_eq!(
            lines[1],
            "    public static ushort[] numbers = new ushort[] {"
        );
        assert_eq!(lines[2], "        0,");
        assert_eq!(lines[6], "        4,");
        assert_eq!(lines[7], "        0,");
        assert_eq!(lines[258], "    };");
        assert_eq!(lines[259], "}");
        assert!(source.ends_with("}\n"));
    }

    // Tests a table of the wrong length is refused
    // Verified by removing the length check
    #[test]
    fn test_render_table_wrong_length() {
        assert!(render_table(&[0; 255]).is_err());
        assert!(render_table(&[]).is_err());
    }

    // Tests indices beyond the ushort range are refused
    // Verified by truncating indices with a cast
    #[test]
    fn test_render_table_index_overflow() {
        let mut entries = vec![0; 256];
        entries[3] = 70_000;

        assert!(matches!(
            render_table(&entries),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }
}
