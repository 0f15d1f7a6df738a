//! Per-locale plural rule table.
//!
//! Each supported locale maps to the number of plural forms it
//! distinguishes and a pure function selecting the form index for a
//! cardinal number. The formulas are the classic gettext cardinal rules,
//! grouped into families so one function serves every locale that shares
//! a grammar.

/// One locale family's plural grammar.
pub(crate) struct PluralRule {
    /// How many pipe-delimited forms a plural string must supply.
    pub(crate) forms: usize,
    /// Maps a cardinal number to a form index in `0..forms`.
    pub(crate) index: fn(u64) -> usize,
}

/// The fallback grammar for unknown locales: English-style one/other.
pub(crate) static DEFAULT_RULE: PluralRule = PluralRule {
    forms: 2,
    index: not_one,
};

/// Locale identifiers grouped by shared plural grammar.
///
/// Identifiers are lowercase; region variants are listed only where the
/// region changes the grammar (e.g. `pt` vs `pt-br`).
pub(crate) static FAMILIES: &[(&[&str], PluralRule)] = &[
    // No plural distinction at all.
    (
        &[
            "bo", "dz", "id", "ja", "ka", "kk", "km", "ko", "ky", "lo", "ms", "my", "su", "th",
            "tt", "ug", "vi", "zh", "zh-cn", "zh-hk", "zh-tw",
        ],
        PluralRule {
            forms: 1,
            index: single_form,
        },
    ),
    // Singular for exactly one, plural otherwise.
    (
        &[
            "af", "az", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu", "fi",
            "fy", "gl", "gu", "he", "hi", "hu", "hy", "it", "kn", "lb", "ml", "mn", "mr", "nb",
            "ne", "nl", "nn", "no", "pa", "ps", "pt", "si", "sq", "sv", "sw", "ta", "te", "ur",
        ],
        PluralRule {
            forms: 2,
            index: not_one,
        },
    ),
    // Singular covers zero and one.
    (
        &[
            "br", "fa", "fil", "fr", "mg", "oc", "pt-br", "tg", "tr", "uz",
        ],
        PluralRule {
            forms: 2,
            index: above_one,
        },
    ),
    // Dedicated form for exactly zero.
    (
        &["jv"],
        PluralRule {
            forms: 2,
            index: not_zero,
        },
    ),
    (
        &["is"],
        PluralRule {
            forms: 2,
            index: icelandic,
        },
    ),
    (
        &["mk"],
        PluralRule {
            forms: 2,
            index: macedonian,
        },
    ),
    // Final-digit classes with the teens folded into "many".
    (
        &["be", "bs", "hr", "ru", "sr", "sr-latn", "uk"],
        PluralRule {
            forms: 3,
            index: slavic,
        },
    ),
    (
        &["cs", "sk"],
        PluralRule {
            forms: 3,
            index: czech,
        },
    ),
    (
        &["pl"],
        PluralRule {
            forms: 3,
            index: polish,
        },
    ),
    (
        &["lv"],
        PluralRule {
            forms: 3,
            index: latvian,
        },
    ),
    (
        &["lt"],
        PluralRule {
            forms: 3,
            index: lithuanian,
        },
    ),
    (
        &["ro"],
        PluralRule {
            forms: 3,
            index: romanian,
        },
    ),
    (
        &["sl"],
        PluralRule {
            forms: 4,
            index: slovenian,
        },
    ),
    (
        &["gd"],
        PluralRule {
            forms: 4,
            index: scottish_gaelic,
        },
    ),
    (
        &["cy"],
        PluralRule {
            forms: 4,
            index: welsh,
        },
    ),
    (
        &["mt"],
        PluralRule {
            forms: 4,
            index: maltese,
        },
    ),
    (
        &["kw"],
        PluralRule {
            forms: 4,
            index: cornish,
        },
    ),
    (
        &["ga"],
        PluralRule {
            forms: 5,
            index: irish,
        },
    ),
    (
        &["ar"],
        PluralRule {
            forms: 6,
            index: arabic,
        },
    ),
];

fn single_form(_n: u64) -> usize {
    0
}

fn not_one(n: u64) -> usize {
    usize::from(n != 1)
}

fn above_one(n: u64) -> usize {
    usize::from(n > 1)
}

fn not_zero(n: u64) -> usize {
    usize::from(n != 0)
}

fn icelandic(n: u64) -> usize {
    usize::from(n % 10 != 1 || n % 100 == 11)
}

fn macedonian(n: u64) -> usize {
    usize::from(n != 1 && n % 10 != 1)
}

/// Russian-family rule: "ends in 1 but not 11", "ends in 2-4 but not
/// 12-14", otherwise.
fn slavic(n: u64) -> usize {
    if n % 10 == 1 && n % 100 != 11 {
        0
    } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

fn czech(n: u64) -> usize {
    if n == 1 {
        0
    } else if (2..=4).contains(&n) {
        1
    } else {
        2
    }
}

fn polish(n: u64) -> usize {
    if n == 1 {
        0
    } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

fn latvian(n: u64) -> usize {
    if n % 10 == 1 && n % 100 != 11 {
        0
    } else if n != 0 {
        1
    } else {
        2
    }
}

fn lithuanian(n: u64) -> usize {
    if n % 10 == 1 && n % 100 != 11 {
        0
    } else if n % 10 >= 2 && !(10..20).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

fn romanian(n: u64) -> usize {
    if n == 1 {
        0
    } else if n == 0 || (1..20).contains(&(n % 100)) {
        1
    } else {
        2
    }
}

fn slovenian(n: u64) -> usize {
    match n % 100 {
        1 => 0,
        2 => 1,
        3 | 4 => 2,
        _ => 3,
    }
}

fn scottish_gaelic(n: u64) -> usize {
    if n == 1 || n == 11 {
        0
    } else if n == 2 || n == 12 {
        1
    } else if n > 2 && n < 20 {
        2
    } else {
        3
    }
}

fn welsh(n: u64) -> usize {
    if n == 1 {
        0
    } else if n == 2 {
        1
    } else if n != 8 && n != 11 {
        2
    } else {
        3
    }
}

fn maltese(n: u64) -> usize {
    if n == 1 {
        0
    } else if n == 0 || (2..11).contains(&(n % 100)) {
        1
    } else if (11..20).contains(&(n % 100)) {
        2
    } else {
        3
    }
}

fn cornish(n: u64) -> usize {
    match n {
        1 => 0,
        2 => 1,
        3 => 2,
        _ => 3,
    }
}

fn irish(n: u64) -> usize {
    match n {
        1 => 0,
        2 => 1,
        3..=6 => 2,
        7..=10 => 3,
        _ => 4,
    }
}

/// Six categories keyed on `n` itself for 0-2 and on `n mod 100` above.
fn arabic(n: u64) -> usize {
    match n {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => {
            if (3..=10).contains(&(n % 100)) {
                3
            } else if n % 100 >= 11 {
                4
            } else {
                5
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_stays_in_bounds() {
        for (locales, rule) in FAMILIES {
            assert!(!locales.is_empty());
            for n in 0..200 {
                let index = (rule.index)(n);
                assert!(
                    index < rule.forms,
                    "index {index} out of bounds for n={n}, forms={}",
                    rule.forms
                );
            }
        }
    }

    #[test]
    fn test_no_locale_listed_twice() {
        let mut seen = std::collections::BTreeSet::new();
        for (locales, _) in FAMILIES {
            for locale in *locales {
                assert!(seen.insert(*locale), "{locale} listed twice");
            }
        }
    }
}
