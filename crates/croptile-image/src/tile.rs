// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The tiler — one source image in, fourteen encoded derivatives out.

use croptile_core::{CroptileError, DerivedImage, RegionTag};
use image::ImageFormat;
use tracing::{debug, info, instrument};

use crate::format;
use crate::raster::{ImageProcessor, SourceImage};
use crate::regions::CROP_TABLE;

/// Produce the original, the six crops, and a horizontal mirror of each.
///
/// Entries come back in [`RegionTag::ALL`] order and are named
/// `{base_name}_{tag}.{ext}`. Every entry is encoded in the source's declared
/// format, or in the format named by `ext` (after alias normalization) when
/// the source has none. Mirrors are taken from the in-memory region, never
/// from its encoded bytes.
///
/// The only failure is [`CroptileError::Encoding`], naming the first region
/// the codec rejected. An unusable `ext` fails on `original`.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn tile(
    image: &SourceImage,
    base_name: &str,
    ext: &str,
) -> Result<Vec<DerivedImage>, CroptileError> {
    let format = format::resolve(image.format(), ext).ok_or_else(|| CroptileError::Encoding {
        region: RegionTag::Original,
        reason: format!("no encoder for format `{}`", format::normalize(ext)),
    })?;
    debug!(?format, "Resolved output format");

    let (w, h) = (image.width(), image.height());
    let original = ImageProcessor::from_dynamic(image.as_dynamic().clone());

    let mut regions = Vec::with_capacity(RegionTag::BASE.len());
    for (tag, rule) in CROP_TABLE {
        regions.push((tag, original.crop_bounds(rule(w, h))));
    }
    regions.insert(0, (RegionTag::Original, original));

    let mut outputs = Vec::with_capacity(RegionTag::ALL.len());
    for (tag, region) in &regions {
        outputs.push(encode_region(region, *tag, base_name, ext, format)?);
    }
    for (tag, region) in regions {
        let mirrored = region.flip_horizontal();
        outputs.push(encode_region(&mirrored, tag.mirrored(), base_name, ext, format)?);
    }

    info!(count = outputs.len(), "Tiling complete");
    Ok(outputs)
}

fn encode_region(
    region: &ImageProcessor,
    tag: RegionTag,
    base_name: &str,
    ext: &str,
    format: ImageFormat,
) -> Result<DerivedImage, CroptileError> {
    let bytes = region.encode(format).map_err(|err| CroptileError::Encoding {
        region: tag,
        reason: err.to_string(),
    })?;
    debug!(
        region = %tag,
        width = region.width(),
        height = region.height(),
        bytes = bytes.len(),
        "Region encoded"
    );
    Ok(DerivedImage {
        region: tag,
        name: tag.file_name(base_name, ext),
        bytes,
    })
}
