// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset generation — open an image, tile it, write the results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use croptile_image::{SourceImage, tile, write_all};
use tracing::{info, instrument};

/// One generator invocation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub image_path: PathBuf,
    pub output_dir: PathBuf,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Tile `request.image_path` and write all derivatives into
/// `request.output_dir`.
#[instrument(skip_all, fields(image = %request.image_path.display()))]
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport> {
    let source = SourceImage::open(&request.image_path)
        .with_context(|| format!("reading {}", request.image_path.display()))?;
    let (base_name, ext) = output_names(&request.image_path, &source)?;

    let outputs = tile(&source, &base_name, &ext)
        .with_context(|| format!("tiling {}", request.image_path.display()))?;
    let written = write_all(&outputs, &request.output_dir)
        .with_context(|| format!("writing to {}", request.output_dir.display()))?;

    info!(
        count = written.len(),
        output_dir = %request.output_dir.display(),
        "Dataset generated"
    );
    Ok(GenerateReport {
        output_dir: request.output_dir.clone(),
        written,
    })
}

/// Base name and extension for the output files: the input's stem and its
/// extension without the dot. Extensionless inputs borrow the primary
/// extension of the detected format.
pub fn output_names(path: &Path, source: &SourceImage) -> Result<(String, String)> {
    let base_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;

    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().into_owned(),
        None => source
            .format()
            .and_then(|format| format.extensions_str().first())
            .map(|ext| (*ext).to_owned())
            .ok_or_else(|| anyhow!("cannot tell the image format of {}", path.display()))?,
    };

    Ok((base_name, ext))
}
