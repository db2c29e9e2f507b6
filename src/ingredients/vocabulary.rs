use std::collections::HashMap;
use std::sync::LazyLock;

/// Unicode vulgar fractions and their decimal spelling.
///
/// Repeating fractions are truncated to six digits, not rounded.
pub const FRACTIONS: &[(&str, &str)] = &[
    ("¼", "0.25"),
    ("½", "0.5"),
    ("¾", "0.75"),
    ("⅐", "0.142857"),
    ("⅑", "0.111111"),
    ("⅒", "0.1"),
    ("⅓", "0.333333"),
    ("⅔", "0.666667"),
    ("⅕", "0.2"),
    ("⅖", "0.4"),
    ("⅗", "0.6"),
    ("⅘", "0.8"),
    ("⅙", "0.166667"),
    ("⅚", "0.833333"),
    ("⅛", "0.125"),
    ("⅜", "0.375"),
    ("⅝", "0.625"),
    ("⅞", "0.875"),
];

/// Quantity words that stand in for a number. Never converted.
pub const QUALITATIVE_AMOUNTS: &[&str] = &["een", "hele", "halve", "half", "snuifje"];

/// Unit spellings and the canonical code each one maps to.
pub const UNITS: &[(&str, &str)] = &[
    ("teentje", "teentje"),
    ("teentjes", "teentje"),
    ("gr", "g"),
    ("g", "g"),
    ("kg", "kg"),
    ("ml", "ml"),
    ("cl", "cl"),
    ("l", "l"),
    ("el", "el"),
    ("tl", "tl"),
    ("kl", "kl"),
    ("stuk", "stuks"),
    ("stuks", "stuks"),
    ("stukken", "stuks"),
    ("snuifje", "snuifje"),
];

static FRACTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FRACTIONS.iter().copied().collect());

static UNIT_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNITS.iter().copied().collect());

/// Decimal spelling of a vulgar fraction glyph, if `amount` is one.
pub fn fraction_to_decimal(amount: &str) -> Option<&'static str> {
    FRACTION_MAP.get(amount).copied()
}

/// Canonical code of a known unit spelling, case-insensitive.
pub fn known_unit(token: &str) -> Option<&'static str> {
    UNIT_MAP.get(token.trim().to_lowercase().as_str()).copied()
}

/// Map a unit token to its canonical spelling.
///
/// Unknown tokens come back lower-cased rather than rejected.
pub fn canonical_unit(token: &str) -> String {
    let key = token.trim().to_lowercase();
    match UNIT_MAP.get(key.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => key,
    }
}
