//! Command-line interface for batch converting images into seamless tiles

use crate::io::configuration::{
    ACCEPTED_EXTENSIONS, DEFAULT_STRATEGY_NAME, OUTPUT_EXTENSION, OUTPUT_SUFFIX, PREVIEW_REPEAT,
    PREVIEW_SUFFIX,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::io::image::{load_bitmap, save_png};
use crate::io::progress::ProgressManager;
use crate::raster::bitmap::Bitmap;
use crate::raster::geometry::tile;
use crate::seam::{BlendParams, Strategy};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "seamtile")]
#[command(
    author,
    version,
    about = "Turn images into seamlessly tileable textures"
)]
/// Command-line arguments for the tiling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG/JPEG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tiling strategy to apply
    #[arg(short, long, value_enum, default_value = DEFAULT_STRATEGY_NAME)]
    pub strategy: Strategy,

    /// Border or blend width in pixels (strategy default when omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Lower the width to the largest value each image accepts
    #[arg(short, long)]
    pub fit: bool,

    /// Also write a 2x2 repeat of each result (<input>_preview.png)
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter directive for the requested verbosity
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Blend parameters as given on the command line
    pub const fn blend_params(&self) -> BlendParams {
        BlendParams { width: self.width }
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the number of files written.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any file's processing fails;
    /// files after the failing one are not processed and the progress bar is
    /// abandoned
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(path = %self.cli.target.display(), "Nothing to process");
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Err(error) = self.process_file(file) {
                if let Some(ref pm) = self.progress_manager {
                    pm.abandon();
                }
                return Err(error);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    /// Files the current arguments select, sorted, with existing outputs skipped
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither an accepted image file nor a
    /// readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_accepted_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG or JPEG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| TileError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_accepted_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let decoded = load_bitmap(input_path)?;
        let result = self.transform_bitmap(&decoded.bitmap)?;
        save_png(&result, &output_path)?;

        if self.cli.preview {
            let preview = tile(&result.view(), PREVIEW_REPEAT, PREVIEW_REPEAT);
            save_png(
                &Bitmap::from_array(preview)?,
                Self::get_preview_path(input_path),
            )?;
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            strategy = %self.cli.strategy,
            source_color = ?decoded.source_color,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Wrote seamless tile"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Run the selected strategy, fitting the width first when `--fit` is set
    ///
    /// # Errors
    ///
    /// Propagates the strategy's validation errors
    pub fn transform_bitmap(&self, bitmap: &Bitmap) -> Result<Bitmap> {
        let strategy = self.cli.strategy;
        let params = if self.cli.fit {
            self.cli.blend_params().fitted(strategy, bitmap)
        } else {
            self.cli.blend_params()
        };
        strategy.apply(bitmap, &params)
    }

    /// Output location for an input: `<stem>_seamless.png` next to it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX)
    }

    /// Preview location for an input: `<stem>_preview.png` next to it
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, PREVIEW_SUFFIX)
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{OUTPUT_EXTENSION}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

fn is_accepted_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

// Results from earlier runs sit next to their inputs and must not be tiled again
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(PREVIEW_SUFFIX))
}
