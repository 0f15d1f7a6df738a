//! Plural form resolution.
//!
//! Different languages need different numbers of inflected forms for a
//! countable quantity: English gets by with two, Russian needs three keyed
//! on the final digit with the teens special-cased, Arabic needs six.
//! Translations carry every form in one pipe-delimited string
//! (`"file|files"`); this module picks the right segment for a number.
//!
//! The locale table is fixed, read-only data built once per process; every
//! function here is pure and callable concurrently without coordination.

mod rules;

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use rules::{DEFAULT_RULE, FAMILIES, PluralRule};

/// An error from plural string validation.
#[derive(Debug, Error)]
pub enum PluralError {
    /// A pipe-delimited plural string has the wrong number of segments for
    /// its locale. Carries the string, locale, and translation key so the
    /// offending catalog entry can be found.
    #[error(
        "plural string {plural:?} for key '{key}' has {found} form(s), locale '{locale}' expects {expected}"
    )]
    FormCountMismatch {
        plural: String,
        locale: String,
        key: String,
        expected: usize,
        found: usize,
    },
}

static RULE_TABLE: OnceLock<HashMap<&'static str, &'static PluralRule>> = OnceLock::new();

fn rule_table() -> &'static HashMap<&'static str, &'static PluralRule> {
    RULE_TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for (locales, rule) in FAMILIES {
            for locale in *locales {
                table.insert(*locale, rule);
            }
        }
        table
    })
}

/// Resolve a locale identifier to its plural rule.
///
/// Lookup is case-insensitive and falls back from a region-qualified
/// identifier to its primary subtag (`pt-PT` -> `pt`), then to the
/// English-style default for unrecognized locales.
fn rule_for(locale: &str) -> &'static PluralRule {
    let normalized = locale.to_ascii_lowercase();
    if let Some(rule) = rule_table().get(normalized.as_str()).copied() {
        return rule;
    }
    if let Some((primary, _)) = normalized.split_once('-')
        && let Some(rule) = rule_table().get(primary).copied()
    {
        return rule;
    }
    &DEFAULT_RULE
}

/// Number of plural forms the locale distinguishes.
///
/// # Example
///
/// ```
/// assert_eq!(tml::form_count("en"), 2);
/// assert_eq!(tml::form_count("ru"), 3);
/// assert_eq!(tml::form_count("ar"), 6);
/// ```
pub fn form_count(locale: &str) -> usize {
    rule_for(locale).forms
}

/// Which form applies to cardinal number `n`, per the locale's rule.
///
/// Always less than [`form_count`] for the same locale. Negative numbers
/// are classified by their absolute value.
pub fn form_index(locale: &str, n: i64) -> usize {
    (rule_for(locale).index)(n.unsigned_abs())
}

/// Pick the form for `n` out of a pipe-delimited plural string.
///
/// Segments are trimmed of surrounding whitespace. `key` is the
/// translation key the string came from, used only for diagnostics.
///
/// # Example
///
/// ```
/// assert_eq!(tml::select_form("en", "file|files", 1, "files_count").unwrap(), "file");
/// assert_eq!(tml::select_form("en", "file|files", 5, "files_count").unwrap(), "files");
/// ```
///
/// # Errors
///
/// Returns [`PluralError::FormCountMismatch`] when the segment count does
/// not equal the locale's form count.
pub fn select_form<'a>(
    locale: &str,
    plural: &'a str,
    n: i64,
    key: &str,
) -> Result<&'a str, PluralError> {
    let rule = rule_for(locale);
    let segments: Vec<&str> = plural.split('|').map(str::trim).collect();
    if segments.len() != rule.forms {
        return Err(PluralError::FormCountMismatch {
            plural: plural.to_string(),
            locale: locale.to_string(),
            key: key.to_string(),
            expected: rule.forms,
            found: segments.len(),
        });
    }
    Ok(segments[(rule.index)(n.unsigned_abs())])
}

/// All locale identifiers with an entry in the plural table, in a stable
/// order. Useful for tooling that audits catalogs per locale.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    FAMILIES
        .iter()
        .flat_map(|(locales, _)| locales.iter().copied())
}
