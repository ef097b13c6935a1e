// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — decoded source images and the per-image crop/mirror/encode
// processor.

pub mod processor;
pub mod source;

pub use processor::ImageProcessor;
pub use source::SourceImage;
