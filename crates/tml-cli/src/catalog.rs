//! Translation catalog loading.
//!
//! A catalog is a flat JSON object mapping translation keys to message
//! strings, one file per locale, named `<locale>.json`.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Result};

/// Load a catalog file into a key-sorted map.
pub fn load_catalog(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = read_to_string(path)
        .map_err(|e| miette!("failed to read catalog {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| miette!("{} is not a valid catalog: {e}", path.display()))
}

/// Locale identifier for a catalog file, taken from its file stem.
pub fn locale_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("en")
        .to_ascii_lowercase()
}
