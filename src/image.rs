use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};

/// The decoded input, normalized to 8-bit RGBA.
/// Lives for one run and is dropped when it ends.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: RgbaImage,
    /// Pixel format the decoder produced, before normalization
    pub original_color: ColorType,
    pub format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn new(decoded: DynamicImage, format: Option<ImageFormat>) -> Self {
        let original_color = decoded.color();
        Self {
            pixels: crate::operations::to_rgba8(decoded),
            original_color,
            format,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
