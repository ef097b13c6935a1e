// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Croptile.

use thiserror::Error;

use crate::types::RegionTag;

/// Top-level error type for all Croptile operations.
#[derive(Debug, Error)]
pub enum CroptileError {
    // -- Tiling --
    /// The codec could not serialize one of the derived regions.
    #[error("failed to encode region `{region}`: {reason}")]
    Encoding { region: RegionTag, reason: String },

    // -- Input --
    #[error("failed to decode source image: {0}")]
    Decode(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CroptileError {
    /// Region tag attached to an encoding failure, if this is one.
    pub fn region(&self) -> Option<RegionTag> {
        match self {
            Self::Encoding { region, .. } => Some(*region),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CroptileError>;
