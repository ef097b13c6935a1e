// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export — write tiler output to a directory, one file per derived image.

use std::path::{Path, PathBuf};

use croptile_core::{CroptileError, DerivedImage};
use tracing::{debug, info, instrument};

/// Write every entry of `outputs` to `dir/<name>`, creating `dir` if needed.
///
/// Existing files with the same name are overwritten. Returns the written
/// paths in input order.
#[instrument(skip(outputs), fields(dir = %dir.display(), count = outputs.len()))]
pub fn write_all(outputs: &[DerivedImage], dir: &Path) -> Result<Vec<PathBuf>, CroptileError> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(outputs.len());
    for derived in outputs {
        let path = dir.join(&derived.name);
        std::fs::write(&path, &derived.bytes)?;
        debug!(path = %path.display(), bytes = derived.bytes.len(), "Wrote derived image");
        written.push(path);
    }

    info!(count = written.len(), "Export complete");
    Ok(written)
}
