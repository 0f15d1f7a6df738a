//! Error types for message formatting.

use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while formatting a parsed message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A tag, void tag, or placeholder name has no entry in the supplied
    /// value map. Strict by design: rendering an empty string instead
    /// would hide localization bugs. `suggestions` holds near-miss key
    /// names from the map, when any exist.
    #[error("missing value for node '{name}'{}", format_suggestions(suggestions))]
    MissingValue {
        name: String,
        suggestions: Vec<String>,
    },
}

/// An error from the combined parse-and-format entry points.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {})", suggestions.join(", "))
    }
}

/// Compute typo suggestions for a missing name from the available keys.
///
/// Returns up to three close matches, nearest first. Ties order
/// alphabetically so output is deterministic.
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
