// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CroptileError;

/// Settings for the `croptile` command-line front end.
///
/// The tiler itself takes no configuration; these only steer where results go
/// and how much gets logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the derived images are written to.
    pub output_dir: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            log_filter: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document. Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CroptileError> {
        let config: Self = serde_json::from_str(json)?;
        if config.log_filter.trim().is_empty() {
            return Err(CroptileError::Config("log_filter must not be empty".into()));
        }
        Ok(config)
    }

    /// Load configuration from a JSON file. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CroptileError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CroptileError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_cli_generator() {
        let config = AppConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = AppConfig::from_json_str(r#"{ "output_dir": "dataset" }"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("dataset"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = AppConfig::from_json_str(r#"{ "port": 7860 }"#).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_log_filter_rejected() {
        let err = AppConfig::from_json_str(r#"{ "log_filter": "  " }"#).unwrap_err();
        assert!(matches!(err, CroptileError::Config(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = AppConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CroptileError::Serialization(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output_dir": "out", "log_filter": "debug" }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CroptileError::Config(_)));
    }
}
