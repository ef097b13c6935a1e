// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output format resolution — alias normalization and codec lookup.

use image::ImageFormat;

/// Extension aliases that must be rewritten to a canonical codec name before
/// the codec lookup. Keys are lower-case.
pub const FORMAT_ALIASES: &[(&str, &str)] = &[("jpg", "jpeg")];

/// Canonical codec names the tiler can encode to.
pub const CODEC_NAMES: &[(&str, ImageFormat)] = &[
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("gif", ImageFormat::Gif),
    ("bmp", ImageFormat::Bmp),
    ("ico", ImageFormat::Ico),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
    ("tga", ImageFormat::Tga),
    ("ppm", ImageFormat::Pnm),
    ("qoi", ImageFormat::Qoi),
];

/// Rewrite `ext` through [`FORMAT_ALIASES`], lower-casing it first.
pub fn normalize(ext: &str) -> String {
    let lower = ext.to_ascii_lowercase();
    FORMAT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| (*canonical).to_owned())
        .unwrap_or(lower)
}

/// Look up the codec for a canonical (already normalized) name.
pub fn codec_for_name(name: &str) -> Option<ImageFormat> {
    CODEC_NAMES
        .iter()
        .find(|(codec, _)| *codec == name)
        .map(|(_, format)| *format)
}

/// Pick the output codec: the declared source format if known, otherwise the
/// normalized extension.
pub fn resolve(declared: Option<ImageFormat>, ext: &str) -> Option<ImageFormat> {
    declared.or_else(|| codec_for_name(&normalize(ext)))
}
