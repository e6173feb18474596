//! Scenario catalog validator.
//!
//! Runs every check over the standard preset catalog (optionally extended
//! with user scenarios from a TOML file), prints one line per check and an
//! overall verdict, and exits non-zero on failure.
//!
//! ```bash
//! cargo run --bin validate -- --scenarios my_scenarios.toml
//! ```

use clap::Parser;
use log::info;
use milankovic::{Preset, Validator};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Validate the paleoclimate scenario catalog
#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(about = "Check scenario presets against paleoclimatic ranges and model behaviour")]
struct Args {
    /// TOML file with additional `[[presets]]` entries to validate
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Emit the full report as JSON instead of text lines
    #[arg(long)]
    json: bool,
}

/// On-disk scenario catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    presets: Vec<Preset>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut validator = Validator::new();
    if let Some(path) = &args.scenarios {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read {}: {}", path.display(), error);
                std::process::exit(2);
            }
        };
        let catalog: CatalogFile = match toml::from_str(&contents) {
            Ok(catalog) => catalog,
            Err(error) => {
                eprintln!("Failed to parse {}: {}", path.display(), error);
                std::process::exit(2);
            }
        };
        info!(
            "loaded {} user scenario(s) from {}",
            catalog.presets.len(),
            path.display()
        );
        validator.extend_catalog(catalog.presets);
    }

    let report = validator.run();

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Failed to serialize report: {}", error);
                std::process::exit(2);
            }
        }
    } else {
        for check in &report.checks {
            let verdict = if check.passed { "PASS" } else { "FAIL" };
            println!("{} {}: {}", verdict, check.name, check.details);
        }
        let failed = report.checks.iter().filter(|check| !check.passed).count();
        println!(
            "{} ({}/{} checks passed)",
            if report.passed() { "PASS" } else { "FAIL" },
            report.checks.len() - failed,
            report.checks.len()
        );
    }

    std::process::exit(if report.passed() { 0 } else { 1 });
}
