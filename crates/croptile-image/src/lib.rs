// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// croptile-image — The crop-and-mirror image tiler.
//
// Turns one decoded image into a fixed set of 14 encoded derivatives: the
// original, six half/quarter crops, and a horizontal mirror of each of those
// seven. Also provides the raster wrappers the tiler operates on and a helper
// for writing the results to a directory.

pub mod export;
pub mod format;
pub mod raster;
pub mod regions;
pub mod tile;

// Re-export the primary items so callers can use `croptile_image::tile` etc.
pub use export::write_all;
pub use raster::processor::ImageProcessor;
pub use raster::source::SourceImage;
pub use regions::{Bounds, CROP_TABLE};
pub use tile::tile;
