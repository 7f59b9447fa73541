use image::RgbaImage;
use pic_scale_safe::{premultiply_rgba8, resize_rgba8, unpremultiply_rgba8, ImageSize};

use crate::{config::RESAMPLING, error::IconError, icon_err, icon_try, image::SourceImage};

/// Produces square resized copies of one source image.
///
/// The source is premultiplied once up front and reused for every target size,
/// so fully transparent pixels don't bleed their colour into the edges.
pub struct SquareResizer<'a> {
    source: &'a RgbaImage,
    premultiplied: Vec<u8>,
    src_size: ImageSize,
}

impl<'a> SquareResizer<'a> {
    pub fn new(source: &'a SourceImage) -> Self {
        let mut premultiplied = source.pixels.as_raw().clone();
        premultiply_rgba8(&mut premultiplied);
        Self {
            source: &source.pixels,
            premultiplied,
            src_size: ImageSize::new(source.width() as usize, source.height() as usize),
        }
    }

    /// Stretches the source to exactly `size`x`size`; aspect ratio is not preserved.
    pub fn resize(&self, size: u32) -> Result<RgbaImage, IconError> {
        if size == 0 {
            return Err(icon_err!("icon size must be positive"));
        }
        if self.source.width() == size && self.source.height() == size {
            return Ok(self.source.clone());
        }
        let dst_size = ImageSize::new(size as usize, size as usize);
        let mut resized = icon_try!(resize_rgba8(
            &self.premultiplied,
            self.src_size,
            dst_size,
            RESAMPLING
        ));
        unpremultiply_rgba8(&mut resized);
        RgbaImage::from_raw(size, size, resized)
            .ok_or_else(|| icon_err!("resampler returned a buffer of the wrong length"))
    }
}
