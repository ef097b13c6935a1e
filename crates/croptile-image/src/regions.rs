// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop table — the six fixed regions and their boundary rules.
//
// Midpoints use floor division, so for odd dimensions the bottom and right
// halves get the extra row or column.

use croptile_core::RegionTag;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Boundary rule: image `(width, height)` to the crop rectangle.
pub type BoundsRule = fn(u32, u32) -> Bounds;

/// The crop regions, in output order.
pub const CROP_TABLE: [(RegionTag, BoundsRule); 6] = [
    (RegionTag::TopHalf, top_half),
    (RegionTag::BottomHalf, bottom_half),
    (RegionTag::TopLeft, top_left),
    (RegionTag::TopRight, top_right),
    (RegionTag::BottomLeft, bottom_left),
    (RegionTag::BottomRight, bottom_right),
];

fn top_half(w: u32, h: u32) -> Bounds {
    Bounds { x: 0, y: 0, width: w, height: h / 2 }
}

fn bottom_half(w: u32, h: u32) -> Bounds {
    Bounds { x: 0, y: h / 2, width: w, height: h - h / 2 }
}

fn top_left(w: u32, h: u32) -> Bounds {
    Bounds { x: 0, y: 0, width: w / 2, height: h / 2 }
}

fn top_right(w: u32, h: u32) -> Bounds {
    Bounds { x: w / 2, y: 0, width: w - w / 2, height: h / 2 }
}

fn bottom_left(w: u32, h: u32) -> Bounds {
    Bounds { x: 0, y: h / 2, width: w / 2, height: h - h / 2 }
}

fn bottom_right(w: u32, h: u32) -> Bounds {
    Bounds { x: w / 2, y: h / 2, width: w - w / 2, height: h - h / 2 }
}

/// Bounds of `tag` for an image of `width` x `height`, or `None` if `tag` is not
/// a crop region.
pub fn bounds_for(tag: RegionTag, width: u32, height: u32) -> Option<Bounds> {
    CROP_TABLE
        .iter()
        .find(|(region, _)| *region == tag)
        .map(|(_, rule)| rule(width, height))
}
