use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::config::PNG_COMPRESSION;
use crate::{error::IconError, icon_try};

/// Writes the icon as an 8-bit RGBA PNG.
///
/// The alpha channel is kept even for fully opaque icons,
/// so unlike a general-purpose encoder this performs no pixel format optimization.
/// Compression is lossless regardless of the settings.
pub fn encode<W: Write>(icon: &RgbaImage, writer: &mut W) -> Result<(), IconError> {
    let (compression, filter) = PNG_COMPRESSION;
    let encoder = PngEncoder::new_with_quality(writer, compression, filter);
    icon_try!(encoder.write_image(
        icon.as_raw(),
        icon.width(),
        icon.height(),
        ExtendedColorType::Rgba8,
    ));
    Ok(())
}
