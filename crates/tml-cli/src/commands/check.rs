//! Implementation of the `tml check` command.
//!
//! Checks translated catalogs against the base-locale catalog:
//! - every message must parse;
//! - every key shared with the base must be structurally equivalent to the
//!   base message (same tags and placeholders, any text);
//! - keys whose base message is pipe-delimited must carry exactly the
//!   target locale's number of plural forms.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tml::{is_structurally_equivalent, parse, select_form, Node};

use crate::catalog::{load_catalog, locale_of};
use crate::output::MessageDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Base-locale catalog the translations are checked against
    #[arg(long)]
    pub base: PathBuf,

    /// Translation catalogs to check (<locale>.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One problem found in a catalog message.
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    locale: String,
    key: String,
    problem: String,
    /// The offending message text.
    message: String,
}

impl Finding {
    fn new(file: &Path, locale: &str, key: &str, message: &str, problem: String) -> Self {
        Finding {
            file: file.display().to_string(),
            locale: locale.to_string(),
            key: key.to_string(),
            problem,
            message: message.to_string(),
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let base_locale = locale_of(&args.base);
    let base = load_catalog(&args.base)?;

    let mut findings: Vec<Finding> = Vec::new();

    // Parse the base once; a base message that does not parse is itself a
    // finding, and its keys are skipped in the per-locale checks.
    let mut base_asts: BTreeMap<&str, Vec<Node>> = BTreeMap::new();
    for (key, message) in &base {
        match parse(message) {
            Ok(ast) => {
                base_asts.insert(key.as_str(), ast);
            }
            Err(e) => {
                findings.push(Finding::new(&args.base, &base_locale, key, message, e.to_string()));
            }
        }
        if message.contains('|') {
            if let Err(e) = select_form(&base_locale, message, 1, key) {
                findings.push(Finding::new(&args.base, &base_locale, key, message, e.to_string()));
            }
        }
    }

    for file in &args.files {
        let locale = locale_of(file);
        let catalog = load_catalog(file)?;

        for (key, message) in &catalog {
            let ast = match parse(message) {
                Ok(ast) => ast,
                Err(e) => {
                    findings.push(Finding::new(file, &locale, key, message, e.to_string()));
                    continue;
                }
            };

            let Some(base_ast) = base_asts.get(key.as_str()) else {
                continue;
            };

            if !is_structurally_equivalent(base_ast, &ast) {
                findings.push(Finding::new(
                    file,
                    &locale,
                    key,
                    message,
                    format!(
                        "message does not preserve the tags/placeholders of the {base_locale} source: {:?}",
                        base[key.as_str()]
                    ),
                ));
            }

            // Plural strings are recognized by the base carrying a '|'.
            if base[key.as_str()].contains('|') {
                if let Err(e) = select_form(&locale, message, 1, key) {
                    findings.push(Finding::new(file, &locale, key, message, e.to_string()));
                }
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&findings)
            .map_err(|e| miette::miette!("failed to serialize findings: {e}"))?;
        println!("{}", json_output);
    } else {
        for finding in &findings {
            let diagnostic = MessageDiagnostic::new(
                format!("{}#{}", finding.file, finding.key),
                &finding.message,
                finding.problem.clone(),
            );
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        if findings.is_empty() {
            println!("{}", "all catalogs check out".green());
        } else {
            println!("{}", format!("{} problem(s) found", findings.len()).red());
        }
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
