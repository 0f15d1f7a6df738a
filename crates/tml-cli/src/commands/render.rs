//! Implementation of the `tml render` command.

use std::collections::HashMap;

use clap::Args;
use miette::{miette, Result};
use serde::Serialize;
use tml::{render_to_string, select_form, Value};

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Message to render
    #[arg(long, required = true)]
    pub message: String,

    /// Values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Treat the message as a pipe-delimited plural string and pick the
    /// form for this count before rendering
    #[arg(long)]
    pub count: Option<i64>,

    /// Locale used for plural form selection
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
struct RenderResult {
    result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> Result<i32> {
    // Plural selection happens on the raw string, before parsing.
    let message = match args.count {
        Some(n) => select_form(&args.locale, &args.message, n, "<command line>")
            .map_err(|e| miette!("{e}"))?
            .to_string(),
        None => args.message.clone(),
    };

    let values: HashMap<String, Value<String>> = args
        .params
        .into_iter()
        .map(|(name, value)| (name, Value::Text(value)))
        .collect();

    let result = render_to_string(&message, &values).map_err(|e| miette!("{e}"))?;

    if args.json {
        let json_output = serde_json::to_string(&RenderResult { result })
            .map_err(|e| miette!("failed to serialize result: {e}"))?;
        println!("{}", json_output);
    } else {
        println!("{}", result);
    }

    Ok(exitcode::OK)
}
