//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::Result;
use serde::Serialize;

use crate::catalog::load_catalog;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Base-locale catalog (e.g., en.json).
    #[arg(long)]
    pub base: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation catalogs. Defaults to the base
    /// catalog's directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let base = load_catalog(&args.base)?;
    let base_keys: BTreeSet<&str> = base.keys().map(String::as_str).collect();
    let base_count = base_keys.len();

    // Determine base directory for translation catalogs
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.base.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each locale
    let mut coverage_data: Vec<LocaleCoverage> = Vec::new();

    for lang in &args.lang {
        let catalog_file = base_dir.join(format!("{}.json", lang));

        let (translated, missing) = if catalog_file.exists() {
            let catalog = load_catalog(&catalog_file)?;
            let translated = base_keys
                .iter()
                .filter(|key| catalog.contains_key(**key))
                .count();
            let missing: Vec<String> = base_keys
                .iter()
                .filter(|key| !catalog.contains_key(**key))
                .map(ToString::to_string)
                .collect();
            (translated, missing)
        } else {
            // Catalog doesn't exist - every key is missing
            (0, base_keys.iter().map(ToString::to_string).collect())
        };

        coverage_data.push(LocaleCoverage {
            locale: lang.clone(),
            translated,
            missing,
        });
    }

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: base_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data)
            .map_err(|e| miette::miette!("failed to serialize coverage: {e}"))?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(base_count, &coverage_data);
        println!("{}", table);

        // Print missing keys per locale
        for coverage in &coverage_data {
            if !coverage.missing.is_empty() {
                println!("\nMissing in {}:", coverage.locale);
                for key in &coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
