// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — crop, horizontal mirror, and encode. Operates on in-memory
// images using the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use tracing::{debug, instrument};

use crate::regions::Bounds;

/// Transform wrapper around a single in-memory image.
///
/// Cropping borrows the current image and returns a new processor holding the
/// copied region, so one source can feed several crops. Mirroring consumes
/// `self`, enabling method chaining:
///
/// ```ignore
/// let bytes = processor
///     .crop_bounds(bounds)
///     .flip_horizontal()
///     .encode(ImageFormat::Png)?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    // -- Transformations --------------------------------------------------------

    /// Copy a rectangular region out of the image.
    ///
    /// `x` and `y` are the top-left corner; `width` and `height` define the
    /// size of the crop rectangle. The rectangle is clamped to the image
    /// bounds, so a region touching the right or bottom edge may come back
    /// empty but never out of range.
    #[instrument(skip(self))]
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let img_w = self.image.width();
        let img_h = self.image.height();

        let safe_x = x.min(img_w);
        let safe_y = y.min(img_h);
        let safe_w = width.min(img_w - safe_x);
        let safe_h = height.min(img_h - safe_y);

        debug!(safe_x, safe_y, safe_w, safe_h, "Cropping image");

        Self {
            image: self.image.crop_imm(safe_x, safe_y, safe_w, safe_h),
        }
    }

    /// Crop to a precomputed [`Bounds`] rectangle.
    pub fn crop_bounds(&self, bounds: Bounds) -> Self {
        self.crop(bounds.x, bounds.y, bounds.width, bounds.height)
    }

    /// Mirror the image left-to-right. Dimensions are unchanged.
    #[instrument(skip(self), fields(width = self.image.width(), height = self.image.height()))]
    pub fn flip_horizontal(self) -> Self {
        debug!("Mirroring image horizontally");
        Self {
            image: self.image.fliph(),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image into `format`, returning the raw bytes.
    ///
    /// Pixel data is passed to the codec as-is: no colour conversion and no
    /// quality setting beyond the codec's default.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, image::ImageError> {
        let mut buffer = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut buffer), format)?;
        Ok(buffer)
    }
}
