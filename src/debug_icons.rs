//! Placeholder icons for builds that don't have real artwork yet

use std::path::{Path, PathBuf};

use crate::config::{DEBUG_ICONS_DIR, ICON_SIZES};
use crate::encode::{create_output_dir, encode};
use crate::error::IconError;
use crate::operations::tricolour;
use crate::utils::filename::{icon_path, placeholder_file_name};
use crate::icon_err;

/// Writes a striped placeholder at every icon size into the debug icon directory under `root`
/// and removes any stale `.placeholder` markers next to them.
pub fn write_debug_icons(root: &Path) -> Result<Vec<PathBuf>, IconError> {
    let dir = root.join(DEBUG_ICONS_DIR);
    create_output_dir(&dir)?;

    println!("Generating correctly sized debug icons...");
    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = icon_path(&dir, size);
        encode(&tricolour(size), &path)?;
        println!("Created: {} ({size}x{size})", path.display());
        written.push(path);

        let stale = dir.join(placeholder_file_name(size));
        if stale.is_file() {
            std::fs::remove_file(&stale)
                .map_err(|error| icon_err!("unable to remove '{}': {error}", stale.display()))?;
            log::info!("removed stale {}", stale.display());
        }
    }
    println!("\nAll debug icons created successfully!");
    Ok(written)
}
