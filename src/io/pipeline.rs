//! Stage drivers connecting the pure composition and atlas code to the filesystem

use crate::atlas::layout::{AtlasBuilder, AtlasLayout};
use crate::atlas::table::{render_table, table_entries};
use crate::compose::assembler::assemble_all;
use crate::compose::mask::{MASK_COUNT, NeighborMask};
use crate::compose::template::TemplateFragments;
use crate::io::configuration::{IMAGE_EXTENSION, TILE_NAME_PREFIX};
use crate::io::error::{Result, file_system_error};
use crate::io::image::{ensure_dir, load_rgb, save_png};
use crate::io::progress::ProgressManager;
use std::path::{Path, PathBuf};

/// Where the fuse stage writes its results
#[derive(Debug, Clone)]
pub struct FuseOutput {
    /// Grid geometry of the atlas
    pub layout: AtlasLayout,
    /// Directory receiving one `Wall_<n>.png` per unique tile
    pub walls_dir: PathBuf,
    /// Path of the generated lookup table source
    pub table_path: PathBuf,
    /// Path of the packed atlas image, if it should be written
    pub atlas_path: Option<PathBuf>,
}

/// Result of a fuse run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuseSummary {
    /// Number of distinct tiles packed into the atlas
    pub unique_tiles: usize,
    /// Number of slots in the atlas
    pub capacity: usize,
    /// Input files not named after a neighbor mask; packed but absent from the table
    pub extra_tiles: usize,
    /// Atlas index per mask, as written to the table
    pub table_entries: Vec<usize>,
}

/// Runs the generate and fuse stages with optional progress display
pub struct Pipeline {
    progress_manager: Option<ProgressManager>,
}

impl Pipeline {
    /// Create a pipeline, drawing progress bars when `show_progress` is set
    pub fn new(show_progress: bool) -> Self {
        Self {
            progress_manager: show_progress.then(ProgressManager::new),
        }
    }

    /// Generate all 256 wall tiles from a template
    ///
    /// Tiles are written to `output_dir` as `Wall_<mask as 8 binary digits>.png`
    /// in ascending mask order. Returns the written paths in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The template cannot be loaded or is too small for `unit_size`
    /// - The output directory cannot be created
    /// - Any tile cannot be saved
    pub fn generate(
        &mut self,
        template_path: &Path,
        output_dir: &Path,
        unit_size: u32,
    ) -> Result<Vec<PathBuf>> {
        let fragments = TemplateFragments::from_png_file(template_path, unit_size)?;
        ensure_dir(output_dir)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("generate", MASK_COUNT);
        }

        let mut written = Vec::with_capacity(MASK_COUNT);
        for (mask, tile) in assemble_all(&fragments) {
            let name = mask.tile_name();
            let path = output_dir.join(format!("{name}.{IMAGE_EXTENSION}"));
            save_png(&tile, &path)?;
            written.push(path);

            if let Some(ref pm) = self.progress_manager {
                pm.advance(&name);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage(&format!("{} tiles", written.len()));
        }

        Ok(written)
    }

    /// Deduplicate generated tiles into an atlas and emit the lookup table
    ///
    /// Tiles are visited in file name order, so indices are assigned in
    /// ascending mask order regardless of how the directory lists them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input directory cannot be read or a tile cannot be loaded
    /// - A tile does not match the atlas tile size
    /// - There are more unique tiles than atlas slots
    /// - Any of the 256 mask tiles is missing
    /// - An output file cannot be written
    pub fn fuse(&mut self, input_dir: &Path, output: &FuseOutput) -> Result<FuseSummary> {
        let files = collect_tile_files(input_dir)?;
        let mut builder = AtlasBuilder::new(output.layout);
        let mut extra_tiles = 0;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("fuse", files.len());
        }

        for file in &files {
            let name = file
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let tile = load_rgb(file)?;
            builder.add(&name, tile)?;
            if NeighborMask::from_tile_name(&name).is_none() {
                extra_tiles += 1;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.advance(&name);
            }
        }

        let unique_tiles = builder.deduplicator().unique_count();
        let capacity = output.layout.capacity();
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage(&format!(
                "{unique_tiles} unique tiles (max is {capacity})"
            ));
        }

        let entries = table_entries(builder.deduplicator())?;
        let source = render_table(&entries)?;
        if let Some(parent) = output.table_path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::write(&output.table_path, source)
            .map_err(|e| file_system_error(&output.table_path, "write table", e))?;

        ensure_dir(&output.walls_dir)?;
        for (number, tile) in builder.unique_tiles().iter().enumerate() {
            let path = output
                .walls_dir
                .join(format!("{TILE_NAME_PREFIX}{number}.{IMAGE_EXTENSION}"));
            save_png(tile, &path)?;
        }

        if let Some(ref atlas_path) = output.atlas_path {
            save_png(builder.atlas(), atlas_path)?;
        }

        Ok(FuseSummary {
            unique_tiles,
            capacity,
            extra_tiles,
            table_entries: entries,
        })
    }

    /// Clean up progress displays
    pub fn finish(&mut self) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
    }
}

/// List the PNG files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn collect_tile_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| file_system_error(dir, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "read directory entry", e))?
            .path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(IMAGE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
