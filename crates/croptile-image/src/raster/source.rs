// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source image — a decoded raster plus the codec it was decoded from.

use std::path::Path;

use croptile_core::error::CroptileError;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::{debug, info, instrument};

/// Immutable input to [`crate::tile`].
///
/// `format` is the codec the pixels were decoded from, when known. The tiler
/// encodes every derivative in that format; images built in memory have no
/// declared format and fall back to the caller's extension.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

impl SourceImage {
    /// Wrap an already-decoded image with its declared format.
    pub fn new(image: DynamicImage, format: Option<ImageFormat>) -> Self {
        Self { image, format }
    }

    /// Wrap an image that has no declared format.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::new(image, None)
    }

    /// Decode a file, recording the format sniffed from its content (or, failing
    /// that, its extension).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CroptileError> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format();
        let image = reader.decode().map_err(|err| {
            CroptileError::Decode(format!("failed to open {}: {}", path.display(), err))
        })?;
        info!(
            width = image.width(),
            height = image.height(),
            ?format,
            "Image loaded"
        );
        Ok(Self { image, format })
    }

    /// Decode raw encoded bytes (JPEG, PNG, etc.), recording the guessed format.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CroptileError> {
        let format = image::guess_format(data)
            .map_err(|err| CroptileError::Decode(format!("unrecognised image data: {}", err)))?;
        let image = image::load_from_memory_with_format(data, format)
            .map_err(|err| CroptileError::Decode(format!("failed to decode image: {}", err)))?;
        debug!(
            width = image.width(),
            height = image.height(),
            ?format,
            "Image decoded from bytes"
        );
        Ok(Self {
            image,
            format: Some(format),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Declared codec, if the image came from encoded data.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Borrow the decoded pixels.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes() -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn from_bytes_records_format() {
        let source = SourceImage::from_bytes(&png_bytes()).unwrap();
        assert_eq!(source.format(), Some(ImageFormat::Png));
        assert_eq!((source.width(), source.height()), (10, 10));
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        let err = SourceImage::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CroptileError::Decode(_)));
    }

    #[test]
    fn from_dynamic_has_no_format() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert_eq!(SourceImage::from_dynamic(img).format(), None);
    }

    #[test]
    fn open_sniffs_content_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        // PNG bytes behind a misleading extension.
        let path = dir.path().join("a.jpg");
        std::fs::write(&path, png_bytes()).unwrap();

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.format(), Some(ImageFormat::Png));
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceImage::open(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, CroptileError::Io(_)));
    }
}
