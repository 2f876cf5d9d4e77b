//! Abbreviation dictionary for sentence boundary detection.
//!
//! Two tiers:
//!
//! - **Titles** (`Dr.`, `Mrs.`, `Gen.`) precede a name, so the period after
//!   them never ends a sentence, even before a capital letter.
//! - **Abbreviations** (`etc.`, `approx.`, `No.`) only suppress a break when
//!   the next character is not an uppercase letter. "See fig. 3" stays one
//!   sentence; "We ran out of fuel, oil, etc. Then it rained." is two.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Honorifics and ranks that are always followed by a name.
pub static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "messrs", "mmes", "dr", "prof", "rev", "fr", "msgr", "hon", "capt",
        "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "rep", "gov",
        "pres", "supt", "insp", "st",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that may close a sentence.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Suffixes and degrees
    set.extend([
        "jr", "sr", "esq", "phd", "md", "dds", "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d",
        "m.d", "j.d", "ll.b", "ll.m", "ed.d",
    ]);

    // Latin and editorial
    set.extend([
        "etc", "vs", "e.g", "i.e", "al", "cf", "viz", "ibid", "n.b", "p.s", "approx", "est",
        "misc", "ref", "refs", "ed", "eds", "trans", "vol", "vols", "no", "nos", "p", "pp", "par",
        "ch", "fig", "figs", "eq", "sec", "art",
    ]);

    // Calendar
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "mar", "apr", "jun", "jul",
        "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu", "thur",
        "thurs", "fri", "sat", "sun",
    ]);

    // Addresses and organisations
    set.extend([
        "ave", "blvd", "rd", "ln", "apt", "ste", "bldg", "dept", "u.s", "u.k", "u.s.a", "e.u",
        "inc", "corp", "ltd", "llc", "co", "bros", "assn", "intl",
    ]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mi", "sq", "mph",
        "kph", "rpm", "hr", "hrs", "min", "mins",
    ]);

    set
});

fn normalize(word: &str) -> String {
    word.trim_matches('.').to_lowercase()
}

/// Check if a word is a title that always precedes a name.
pub fn is_title(word: &str) -> bool {
    TITLES.contains(normalize(word).as_str())
}

/// Check if a word is a known abbreviation (titles included).
pub fn is_abbreviation(word: &str) -> bool {
    let normalized = normalize(word);
    TITLES.contains(normalized.as_str()) || ABBREVIATIONS.contains(normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_recognized() {
        assert!(is_title("Dr"));
        assert!(is_title("mrs."));
        assert!(!is_title("etc"));
    }

    #[test]
    fn common_abbreviations() {
        assert!(is_abbreviation("dr"));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("i.e"));
        assert!(is_abbreviation("e.g."));
        assert!(is_abbreviation("No"));
    }

    #[test]
    fn not_abbreviations() {
        assert!(!is_abbreviation("hello"));
        assert!(!is_abbreviation("cat"));
        assert!(!is_abbreviation("test"));
    }
}
