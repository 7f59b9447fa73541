use std::path::Path;

use image::ImageReader;

use crate::error::IconError;
use crate::image::SourceImage;

/// Guesses the format based on file contents, decodes, and normalizes to RGBA.
pub fn decode(file: &Path) -> Result<SourceImage, IconError> {
    if !file.is_file() {
        return Err(IconError::NotFound(file.to_owned()));
    }
    let decoder = ImageReader::open(file)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| IconError::Decode(e.to_string()))?;
    let format = decoder.format();
    log::debug!("guessed format {format:?} for {}", file.display());
    let pixels = decoder
        .decode()
        .map_err(|e| IconError::Decode(e.to_string()))?;
    Ok(SourceImage::new(pixels, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageFormat, RgbImage};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        assert!(matches!(decode(&missing), Err(IconError::NotFound(p)) if p == missing));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(decode(dir.path()), Err(IconError::NotFound(_))));
    }

    #[test]
    fn text_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "definitely not an image").unwrap();
        assert!(matches!(decode(&path), Err(IconError::Decode(_))));
    }

    #[test]
    fn format_guessed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        // misleading extension on purpose
        let path = dir.path().join("icon.jpg");
        RgbImage::new(4, 4)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let source = decode(&path).unwrap();
        assert_eq!(source.format, Some(ImageFormat::Png));
        assert_eq!(source.original_color, ColorType::Rgb8);
    }
}
