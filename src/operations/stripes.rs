use image::{Rgba, RgbaImage};

const SAFFRON: Rgba<u8> = Rgba([0xFF, 0x99, 0x33, 0xFF]);
const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
const GREEN: Rgba<u8> = Rgba([0x13, 0x88, 0x08, 0xFF]);

/// Square placeholder icon: saffron, white and green horizontal stripes.
/// The green stripe absorbs the rounding remainder.
pub fn tricolour(size: u32) -> RgbaImage {
    let stripe = (f64::from(size) / 3.0).round() as u32;
    RgbaImage::from_fn(size, size, |_, y| {
        if y < stripe {
            SAFFRON
        } else if y < stripe * 2 {
            WHITE
        } else {
            GREEN
        }
    })
}
