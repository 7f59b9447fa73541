use image::{DynamicImage, RgbaImage};

/// Converts any decoded image to 8-bit RGBA.
/// Images without an alpha channel become fully opaque.
pub fn to_rgba8(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(pixels) => pixels, // no-op
        other => {
            log::debug!("converting {:?} to Rgba8", other.color());
            other.into_rgba8()
        }
    }
}
