//! Helpers for using `quickcheck`'s `Arbitrary` trait with images

use image::{DynamicImage, RgbaImage};
use quickcheck::{Arbitrary, Gen};

/// Upper bound on generated image sides, to keep property tests fast
const MAX_SIDE: u8 = 200;

#[must_use]
pub fn dimension(gen: &mut Gen) -> u32 {
    u32::from(u8::arbitrary(gen) % MAX_SIDE) + 1
}

#[must_use]
pub fn rgba_image(gen: &mut Gen) -> RgbaImage {
    let width = dimension(gen);
    let height = dimension(gen);
    // a single random pixel tiled over a gradient is plenty to exercise the resampler
    let base: [u8; 4] = [
        u8::arbitrary(gen),
        u8::arbitrary(gen),
        u8::arbitrary(gen),
        u8::arbitrary(gen),
    ];
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            base[0].wrapping_add(x as u8),
            base[1].wrapping_add(y as u8),
            base[2],
            base[3],
        ])
    })
}

/// A decoded image in one of the pixel formats decoders commonly hand out
#[derive(Debug, Clone)]
pub struct ArbitraryImage(pub DynamicImage);

impl Arbitrary for ArbitraryImage {
    fn arbitrary(gen: &mut Gen) -> Self {
        let rgba = DynamicImage::ImageRgba8(rgba_image(gen));
        let image = match u8::arbitrary(gen) % 5 {
            0 => DynamicImage::ImageLuma8(rgba.to_luma8()),
            1 => DynamicImage::ImageLumaA8(rgba.to_luma_alpha8()),
            2 => DynamicImage::ImageRgb8(rgba.to_rgb8()),
            3 => DynamicImage::ImageRgb16(rgba.to_rgb16()),
            _ => rgba,
        };
        Self(image)
    }
}
