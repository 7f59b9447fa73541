use std::path::{Path, PathBuf};

use crate::config::{ICON_SIZES, OUTPUT_DIRS};
use crate::decode::decode;
use crate::encode::{create_output_dir, encode};
use crate::error::IconError;
use crate::operations::SquareResizer;
use crate::utils::filename::{icon_file_name, icon_path};

/// One run: a single input image turned into every icon size in every output directory
#[derive(Debug, Default)]
pub struct IconPlan {
    input: PathBuf,
    /// Output directories are resolved against this; empty means the working directory
    root: PathBuf,
}

impl IconPlan {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_dirs(&self) -> Vec<PathBuf> {
        OUTPUT_DIRS.iter().map(|dir| self.root.join(dir)).collect()
    }

    /// Every file the run produces, in the order it is written
    pub fn output_locations(&self) -> Vec<PathBuf> {
        let dirs = self.output_dirs();
        ICON_SIZES
            .iter()
            .flat_map(|&size| dirs.iter().map(move |dir| icon_path(dir, size)))
            .collect()
    }

    /// Fails fast: the first error aborts the run, leaving files already written in place.
    pub fn execute(&self) -> Result<Vec<PathBuf>, IconError> {
        println!("Loading icon from: {}", self.input.display());
        let source = decode(&self.input)?;
        println!(
            "Original image loaded: {}x{}",
            source.width(),
            source.height()
        );
        log::debug!(
            "source pixel format {:?}, container {:?}",
            source.original_color,
            source.format
        );

        let dirs = self.output_dirs();
        for dir in &dirs {
            create_output_dir(dir)?;
            println!("Created/verified directory: {}", dir.display());
        }

        let resizer = SquareResizer::new(&source);
        let mut written = Vec::with_capacity(ICON_SIZES.len() * dirs.len());
        for size in ICON_SIZES {
            println!("\nCreating {size}x{size} icon...");
            let icon = resizer.resize(size)?;
            for dir in &dirs {
                let path = icon_path(dir, size);
                encode(&icon, &path)?;
                println!("   Saved: {}", path.display());
                written.push(path);
            }
        }

        println!("\nAll icons created successfully!");
        println!("\nIcon locations:");
        for dir in &dirs {
            println!("   - {}/", dir.display());
            for size in ICON_SIZES {
                println!("     - {}", icon_file_name(size));
            }
        }

        Ok(written)
    }
}
