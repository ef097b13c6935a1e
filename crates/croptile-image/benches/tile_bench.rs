// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the croptile-image crate. Measures a full tiling
// run (six crops, seven mirrors, fourteen encodes) on synthetic images.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use croptile_image::{SourceImage, tile};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Gradient image so the encoders see non-trivial data.
fn gradient(width: u32, height: u32) -> SourceImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    SourceImage::from_dynamic(DynamicImage::ImageRgb8(img))
}

/// Tile a 400x400 image as PNG and as JPEG.
fn bench_tile(c: &mut Criterion) {
    let source = gradient(400, 400);

    c.bench_function("tile png (400x400)", |b| {
        b.iter(|| black_box(tile(black_box(&source), "bench", "png")));
    });

    c.bench_function("tile jpg (400x400)", |b| {
        b.iter(|| black_box(tile(black_box(&source), "bench", "jpg")));
    });
}

criterion_group!(benches, bench_tile);
criterion_main!(benches);
