// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Croptile — generate a cropped and mirrored dataset from one image.
//
// Entry point. Parses arguments, loads configuration, initialises logging, and
// runs the generator.

mod services;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use croptile_core::AppConfig;

use services::generate::{GenerateRequest, generate};

/// Generate dataset from image.
#[derive(Parser, Debug)]
#[command(name = "croptile")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path.
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Output directory (overrides the config file; default `output`).
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE", env = "CROPTILE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let directive = log_directive(std::env::var("RUST_LOG").ok(), &args, &config);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&directive)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(&args, &config) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn load_config(args: &Args) -> Result<AppConfig> {
    match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Filter directive: `RUST_LOG` if set, then `--verbose`, then the config.
fn log_directive(rust_log: Option<String>, args: &Args, config: &AppConfig) -> String {
    match rust_log.filter(|directive| !directive.trim().is_empty()) {
        Some(directive) => directive,
        None if args.verbose => "debug".to_owned(),
        None => config.log_filter.clone(),
    }
}

/// Output directory: `--output`, then the config's `output_dir` (which
/// defaults to `output`).
fn output_dir(args: &Args, config: &AppConfig) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| config.output_dir.clone())
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let request = GenerateRequest {
        image_path: args.image_path.clone(),
        output_dir: output_dir(args, config),
    };
    let report = generate(&request)?;

    println!(
        "Saved {} images to {}",
        report.written.len(),
        report.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn config(output_dir: &str, log_filter: &str) -> AppConfig {
        AppConfig {
            output_dir: PathBuf::from(output_dir),
            log_filter: log_filter.to_owned(),
        }
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn image_path_is_required() {
        assert!(Args::try_parse_from(["croptile"]).is_err());
    }

    #[test]
    fn output_flag_beats_config() {
        let args = parse(&["croptile", "cat.png", "-o", "flag_dir"]);
        assert_eq!(
            output_dir(&args, &config("config_dir", "info")),
            PathBuf::from("flag_dir")
        );

        let args = parse(&["croptile", "cat.png", "--output", "long_dir"]);
        assert_eq!(
            output_dir(&args, &config("config_dir", "info")),
            PathBuf::from("long_dir")
        );
    }

    #[test]
    fn config_output_dir_used_without_flag() {
        let args = parse(&["croptile", "cat.png"]);
        assert_eq!(
            output_dir(&args, &config("config_dir", "info")),
            PathBuf::from("config_dir")
        );
    }

    #[test]
    fn default_output_dir_without_flag_or_config() {
        let args = parse(&["croptile", "cat.png"]);
        assert_eq!(output_dir(&args, &AppConfig::default()), PathBuf::from("output"));
    }

    #[test]
    fn rust_log_beats_verbose_and_config() {
        let args = parse(&["croptile", "cat.png", "-v"]);
        let directive = log_directive(Some("warn".into()), &args, &config("out", "trace"));
        assert_eq!(directive, "warn");
    }

    #[test]
    fn verbose_beats_config() {
        let args = parse(&["croptile", "cat.png", "--verbose"]);
        assert_eq!(log_directive(None, &args, &config("out", "warn")), "debug");
    }

    #[test]
    fn config_filter_used_when_quiet() {
        let args = parse(&["croptile", "cat.png"]);
        assert_eq!(log_directive(None, &args, &config("out", "warn")), "warn");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let args = parse(&["croptile", "cat.png"]);
        assert_eq!(
            log_directive(Some("  ".into()), &args, &config("out", "error")),
            "error"
        );
    }

    #[test]
    fn config_flag_is_parsed() {
        let args = parse(&["croptile", "cat.png", "--config", "settings.json"]);
        assert_eq!(args.config, Some(PathBuf::from("settings.json")));
        assert_eq!(args.image_path, PathBuf::from("cat.png"));
    }
}
