use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::RgbaImage;

use crate::{encoders, error::IconError, icon_err, icon_try};

/// Writes `icon` to `path` as PNG, replacing any existing file.
pub fn encode(icon: &RgbaImage, path: &Path) -> Result<(), IconError> {
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| icon_err!("unable to open '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    encoders::png::encode(icon, &mut writer)?;

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    icon_try!(writer.flush());
    log::debug!("wrote {}x{} icon to {}", icon.width(), icon.height(), path.display());
    Ok(())
}

/// Creates `dir` and all its parents. An existing directory is not an error.
pub fn create_output_dir(dir: &Path) -> Result<(), IconError> {
    std::fs::create_dir_all(dir)
        .map_err(|error| icon_err!("unable to create directory '{}': {error}", dir.display()))
}
