use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use super::vocabulary::{
    canonical_unit, fraction_to_decimal, known_unit, FRACTIONS, QUALITATIVE_AMOUNTS, UNITS,
};
use crate::model::IngredientLine;

/// Anchored `amount? unit?` prefix, built from the vocabulary tables.
///
/// The empty `after_*`/`bare` groups mark where the name starts. Whole-word
/// checks count fraction glyphs as word characters, so `"1½"` is not split
/// after the digit while `"½, fijngehakt"` still ends the amount at the glyph.
/// The check also applies when no unit matched, so a number glued to a word
/// ("250gram") is left in the name instead of being split into a bogus amount.
static INGREDIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let fractions = alternation(FRACTIONS.iter().map(|(glyph, _)| *glyph));
    let words = alternation(QUALITATIVE_AMOUNTS.iter().copied());
    let units = alternation(UNITS.iter().map(|(unit, _)| *unit));
    let glyphs: String = FRACTIONS.iter().map(|(glyph, _)| *glyph).collect();

    // Next character ends a word, or starts one.
    let word_end = format!(r"(?:$|[^\w{glyphs}])");
    let word_start = format!(r"[\w{glyphs}]");

    let pattern = [
        r"(?i)^\s*(?:".to_string(),
        format!(r"(?P<amount>\d+[.,]?\d*|{fractions}|{words})"),
        format!(r"(?:\s*(?P<amount_unit>{units})(?P<after_amount_unit>){word_end}"),
        format!(r"|\s+(?P<after_space>){word_start}"),
        format!(r"|(?P<after_amount>){word_end})"),
        format!(r"|(?P<unit>{units})(?P<after_unit>){word_end}"),
        format!(r"|(?P<bare>){word_start})"),
    ]
    .concat();
    Regex::new(&pattern).expect("ingredient pattern is built from static tables")
});

const NAME_STARTS: &[&str] = &[
    "after_amount_unit",
    "after_space",
    "after_amount",
    "after_unit",
    "bare",
];

fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.map(regex::escape).collect::<Vec<_>>().join("|")
}

/// Split one ingredient line into amount, unit and name.
///
/// Never fails: a line the pattern cannot segment becomes the name verbatim.
pub fn parse_ingredient_line(line: &str) -> IngredientLine {
    debug!("Parsing ingredient line: '{}'", line);

    let trimmed = line.trim();
    let Some(captures) = INGREDIENT_RE.captures(trimmed) else {
        debug!("No pattern match, using the whole line as name");
        return IngredientLine {
            raw_text: line.to_string(),
            amount: None,
            unit: None,
            name: Some(line.to_string()),
        };
    };

    let amount = captures.name("amount").map(|m| {
        let amount = m.as_str();
        match fraction_to_decimal(amount) {
            Some(decimal) => {
                debug!("Converting fraction '{}' to {}", amount, decimal);
                decimal.to_string()
            }
            None => amount.to_string(),
        }
    });
    let unit = captures
        .name("amount_unit")
        .or_else(|| captures.name("unit"))
        .map(|m| canonical_unit(m.as_str()));
    let name_start = NAME_STARTS
        .iter()
        .find_map(|group| captures.name(group))
        .map_or(trimmed.len(), |m| m.start());
    let name = Some(
        trimmed[name_start..]
            .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
            .trim(),
    )
    .filter(|name| !name.is_empty())
    .map(str::to_string);

    let (unit, name) = promote_unit(amount.as_deref(), unit, name);

    let ingredient = IngredientLine {
        raw_text: line.to_string(),
        amount,
        unit,
        name,
    };
    debug!("Parsed ingredient: {:?}", ingredient);
    ingredient
}

/// Second pass for lines where an amount matched but the unit group stayed empty.
///
/// If the first word of the name is a known unit and more text follows, that
/// word becomes the unit.
pub(crate) fn promote_unit(
    amount: Option<&str>,
    unit: Option<String>,
    name: Option<String>,
) -> (Option<String>, Option<String>) {
    if unit.is_some() || amount.is_none() {
        return (unit, name);
    }
    let Some(name) = name else {
        return (None, None);
    };

    if let Some((first, rest)) = name.split_once(char::is_whitespace) {
        let rest = rest.trim();
        if let (Some(canonical), false) = (known_unit(first), rest.is_empty()) {
            debug!("Promoting '{}' from the name to unit '{}'", first, canonical);
            return (Some(canonical.to_string()), Some(rest.to_string()));
        }
    }

    (None, Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(line: &str) -> (Option<String>, Option<String>, Option<String>) {
        let parsed = parse_ingredient_line(line);
        (parsed.amount, parsed.unit, parsed.name)
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_amount_unit_and_name() {
        assert_eq!(triple("2 el olijfolie"), (some("2"), some("el"), some("olijfolie")));
        assert_eq!(triple("200 gr kip"), (some("200"), some("g"), some("kip")));
        assert_eq!(triple("1,5 kg aardappelen"), (some("1,5"), some("kg"), some("aardappelen")));
    }

    #[test]
    fn test_unit_glued_to_amount() {
        assert_eq!(triple("125g boter"), (some("125"), some("g"), some("boter")));
    }

    #[test]
    fn test_unit_followed_by_dot() {
        assert_eq!(triple("1 tl. komijn"), (some("1"), some("tl"), some("komijn")));
    }

    #[test]
    fn test_unit_prefix_of_word_is_not_a_unit() {
        assert_eq!(triple("1 limoen"), (some("1"), None, some("limoen")));
        assert_eq!(triple("2 eieren"), (some("2"), None, some("eieren")));
    }

    #[test]
    fn test_number_glued_to_word_stays_in_name() {
        assert_eq!(triple("250gram boter"), (None, None, some("250gram boter")));
    }

    #[test]
    fn test_qualitative_amount_is_kept_verbatim() {
        assert_eq!(triple("halve ui"), (some("halve"), None, some("ui")));
        assert_eq!(triple("een snuifje zout"), (some("een"), some("snuifje"), some("zout")));
    }

    #[test]
    fn test_bare_fraction_glyph() {
        assert_eq!(triple("½"), (some("0.5"), None, None));
    }

    #[test]
    fn test_line_starting_with_punctuation_is_all_name() {
        assert_eq!(
            triple("(optioneel) verse peterselie"),
            (None, None, some("(optioneel) verse peterselie"))
        );
    }

    #[test]
    fn test_fraction_glyph_followed_by_punctuation() {
        assert_eq!(
            triple("¾ (ca. 200 g) bloem"),
            (some("0.75"), None, some("(ca. 200 g) bloem"))
        );
        assert_eq!(triple("½, fijngehakt"), (some("0.5"), None, some(", fijngehakt")));
    }

    #[test]
    fn test_digit_glued_to_glyph_stays_in_name() {
        assert_eq!(triple("1½ el suiker"), (None, None, some("1½ el suiker")));
    }

    #[test]
    fn test_line_break_after_unit_is_skipped() {
        assert_eq!(triple("2 el\nolie"), (some("2"), some("el"), some("olie")));
    }

    #[test]
    fn test_promote_unit_from_name() {
        assert_eq!(
            promote_unit(Some("2"), None, some("EL suiker")),
            (some("el"), some("suiker"))
        );
    }

    #[test]
    fn test_promote_unit_keeps_unknown_first_word() {
        assert_eq!(
            promote_unit(Some("2"), None, some("grote uien")),
            (None, some("grote uien"))
        );
    }

    #[test]
    fn test_promote_unit_needs_amount_and_remainder() {
        assert_eq!(promote_unit(None, None, some("el suiker")), (None, some("el suiker")));
        assert_eq!(promote_unit(Some("2"), None, some("el")), (None, some("el")));
    }

    #[test]
    fn test_promote_unit_leaves_bound_unit_alone() {
        assert_eq!(
            promote_unit(Some("2"), some("g"), some("kg bloem")),
            (some("g"), some("kg bloem"))
        );
    }
}
