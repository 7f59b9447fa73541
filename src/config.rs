//! The fixed icon set. None of this is configurable at runtime.

use image::codecs::png::{CompressionType, FilterType};
use pic_scale_safe::ResamplingFunction;

/// Side lengths of the generated icons, in the order they are produced
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directories the icons are written to, relative to the working directory
pub const OUTPUT_DIRS: [&str; 2] = ["assets/icons", "dist/assets/icons"];

/// Where the placeholder icons from `iconsizer-debug` go
pub const DEBUG_ICONS_DIR: &str = "dist/assets/icons";

pub const RESAMPLING: ResamplingFunction = ResamplingFunction::Lanczos3;

/// Slowest and smallest lossless setting the PNG encoder offers
pub const PNG_COMPRESSION: (CompressionType, FilterType) =
    (CompressionType::Best, FilterType::Adaptive);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_ascending() {
        assert!(ICON_SIZES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn debug_icons_share_an_output_dir() {
        assert!(OUTPUT_DIRS.contains(&DEBUG_ICONS_DIR));
    }
}
