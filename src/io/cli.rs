//! Command-line interface for the generate, fuse and build stages

use crate::atlas::layout::AtlasLayout;
use crate::io::configuration::{
    DEFAULT_ATLAS_SIZE, DEFAULT_TABLE_DIR, DEFAULT_TEMPLATE_PATH, DEFAULT_TILE_SIZE,
    DEFAULT_TILES_DIR, DEFAULT_UNIT_SIZE, DEFAULT_WALLS_DIR, TABLE_FILE_NAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::pipeline::{FuseOutput, FuseSummary, Pipeline};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "walltile")]
#[command(
    author,
    version,
    about = "Generate autotiled wall sprites and fuse them into an atlas"
)]
/// Command-line arguments for the wall tile pipeline
pub struct Cli {
    /// Stage to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Pipeline stages
#[derive(Subcommand)]
pub enum Command {
    /// Compose one wall tile per neighbor mask from a template
    Generate(GenerateArgs),
    /// Deduplicate generated tiles into an atlas and lookup table
    Fuse(FuseArgs),
    /// Run generate then fuse
    Build {
        /// Generation settings
        #[command(flatten)]
        generate: GenerateArgs,
        /// Fusing settings
        #[command(flatten)]
        fuse: FuseOptions,
    },
}

/// Arguments for the generate stage
#[derive(Args)]
pub struct GenerateArgs {
    /// Template PNG holding the corner fragments in a 3x2 grid
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Directory receiving the generated tiles
    #[arg(short = 'o', long, default_value = DEFAULT_TILES_DIR)]
    pub tiles_dir: PathBuf,

    /// Edge length of one template fragment in pixels
    #[arg(short, long, default_value_t = DEFAULT_UNIT_SIZE)]
    pub unit_size: u32,
}

/// Arguments for the fuse stage
#[derive(Args)]
pub struct FuseArgs {
    /// Directory of generated tiles to fuse
    #[arg(short = 'i', long, default_value = DEFAULT_TILES_DIR)]
    pub tiles_dir: PathBuf,

    /// Output settings
    #[command(flatten)]
    pub options: FuseOptions,
}

/// Output settings shared by fuse and build
#[derive(Args)]
pub struct FuseOptions {
    /// Directory receiving the deduplicated tiles
    #[arg(short, long, default_value = DEFAULT_WALLS_DIR)]
    pub walls_dir: PathBuf,

    /// Lookup table output path (defaults to Assets/TileNumbers.cs)
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Also write the packed atlas image to this path
    #[arg(short, long)]
    pub atlas: Option<PathBuf>,

    /// Edge length of the square atlas in pixels
    #[arg(long, default_value_t = DEFAULT_ATLAS_SIZE)]
    pub atlas_size: u32,

    /// Edge length of one atlas slot in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,
}

impl FuseOptions {
    /// Resolve the options into fuse stage outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the atlas geometry is invalid
    pub fn to_output(&self) -> Result<FuseOutput> {
        Ok(FuseOutput {
            layout: AtlasLayout::new(self.atlas_size, self.tile_size)?,
            walls_dir: self.walls_dir.clone(),
            table_path: self
                .table
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_DIR).join(TABLE_FILE_NAME)),
            atlas_path: self.atlas.clone(),
        })
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run the selected stage
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails; nothing is retried
    pub fn run(&self) -> Result<()> {
        let mut pipeline = Pipeline::new(self.should_show_progress());

        let outcome = match &self.command {
            Command::Generate(args) => self.run_generate(&mut pipeline, args),
            Command::Fuse(args) => self.run_fuse(&mut pipeline, &args.tiles_dir, &args.options),
            Command::Build { generate, fuse } => self.run_build(&mut pipeline, generate, fuse),
        };

        pipeline.finish();
        outcome
    }

    fn run_build(
        &self,
        pipeline: &mut Pipeline,
        generate: &GenerateArgs,
        fuse: &FuseOptions,
    ) -> Result<()> {
        let tile_size = generate.unit_size.checked_mul(2).ok_or_else(|| {
            invalid_parameter("unit_size", &generate.unit_size, &"tile size overflows u32")
        })?;
        if tile_size != fuse.tile_size {
            return Err(invalid_parameter(
                "tile_size",
                &fuse.tile_size,
                &format!("must be twice the unit size {}", generate.unit_size),
            ));
        }
        self.run_generate(pipeline, generate)?;
        self.run_fuse(pipeline, &generate.tiles_dir, fuse)
    }

    // Allow print for user feedback on stage results
    #[allow(clippy::print_stderr)]
    fn run_generate(&self, pipeline: &mut Pipeline, args: &GenerateArgs) -> Result<()> {
        let written = pipeline.generate(&args.template, &args.tiles_dir, args.unit_size)?;
        if !self.quiet {
            eprintln!(
                "Generated {} tiles in {}",
                written.len(),
                args.tiles_dir.display()
            );
        }
        Ok(())
    }

    // Allow print for user feedback on stage results
    #[allow(clippy::print_stderr)]
    fn run_fuse(
        &self,
        pipeline: &mut Pipeline,
        tiles_dir: &Path,
        options: &FuseOptions,
    ) -> Result<()> {
        let output = options.to_output()?;
        let FuseSummary {
            unique_tiles,
            capacity,
            extra_tiles,
            table_entries,
        } = pipeline.fuse(tiles_dir, &output)?;
        if !self.quiet {
            eprintln!("{unique_tiles} unique tiles (max is {capacity})");
            if extra_tiles > 0 {
                eprintln!("{extra_tiles} tiles without a mask name were packed but not tabled");
            }
            eprintln!(
                "Wrote {} table entries to {}",
                table_entries.len(),
                output.table_path.display()
            );
        }
        Ok(())
    }
}
