// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Croptile image tiler.

use serde::{Deserialize, Serialize};

/// Label for one of the fixed output variants of a tiling run.
///
/// The first seven tags are the base regions (the untouched original plus six
/// crops); the remaining seven are their horizontal mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionTag {
    Original,
    TopHalf,
    BottomHalf,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    OriginalFlip,
    TopHalfFlip,
    BottomHalfFlip,
    TopLeftFlip,
    TopRightFlip,
    BottomLeftFlip,
    BottomRightFlip,
}

impl RegionTag {
    /// Every tag, in output order.
    pub const ALL: [RegionTag; 14] = [
        Self::Original,
        Self::TopHalf,
        Self::BottomHalf,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::OriginalFlip,
        Self::TopHalfFlip,
        Self::BottomHalfFlip,
        Self::TopLeftFlip,
        Self::TopRightFlip,
        Self::BottomLeftFlip,
        Self::BottomRightFlip,
    ];

    /// The seven unmirrored tags, in output order.
    pub const BASE: [RegionTag; 7] = [
        Self::Original,
        Self::TopHalf,
        Self::BottomHalf,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Snake-case tag used in output filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::TopHalf => "top_half",
            Self::BottomHalf => "bottom_half",
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
            Self::OriginalFlip => "original_flip",
            Self::TopHalfFlip => "top_half_flip",
            Self::BottomHalfFlip => "bottom_half_flip",
            Self::TopLeftFlip => "top_left_flip",
            Self::TopRightFlip => "top_right_flip",
            Self::BottomLeftFlip => "bottom_left_flip",
            Self::BottomRightFlip => "bottom_right_flip",
        }
    }

    /// Whether this tag names a horizontally mirrored variant.
    pub fn is_mirrored(&self) -> bool {
        matches!(
            self,
            Self::OriginalFlip
                | Self::TopHalfFlip
                | Self::BottomHalfFlip
                | Self::TopLeftFlip
                | Self::TopRightFlip
                | Self::BottomLeftFlip
                | Self::BottomRightFlip
        )
    }

    /// The mirrored counterpart of a base tag. Mirrored tags map to themselves.
    pub fn mirrored(&self) -> Self {
        match self {
            Self::Original => Self::OriginalFlip,
            Self::TopHalf => Self::TopHalfFlip,
            Self::BottomHalf => Self::BottomHalfFlip,
            Self::TopLeft => Self::TopLeftFlip,
            Self::TopRight => Self::TopRightFlip,
            Self::BottomLeft => Self::BottomLeftFlip,
            Self::BottomRight => Self::BottomRightFlip,
            flipped => *flipped,
        }
    }

    /// Output filename for this tag: `{base_name}_{tag}.{ext}`.
    ///
    /// Neither `base_name` nor `ext` is sanitized.
    pub fn file_name(&self, base_name: &str, ext: &str) -> String {
        format!("{base_name}_{}.{ext}", self.as_str())
    }
}

impl std::fmt::Display for RegionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One encoded output of a tiling run.
///
/// Owned by the caller once returned; the tiler keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedImage {
    /// Region this image was produced from.
    pub region: RegionTag,
    /// Output filename, e.g. `photo_top_left_flip.jpg`.
    pub name: String,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}
