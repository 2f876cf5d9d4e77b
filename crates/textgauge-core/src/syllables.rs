//! Vowel-group syllable estimation.
//!
//! Counts maximal runs of vowels (`a e i o u y`), drops one for a silent
//! trailing `e` on words longer than three letters, and never returns less
//! than one. Deliberately a heuristic with no exception dictionary, so that
//! scores are reproducible from the rule alone.

/// Estimate the syllable count of a single word.
///
/// Non-letter characters (apostrophes, hyphens, digits) are ignored.
/// Case-insensitive.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if letters.len() > 3 && letters.last() == Some(&'e') {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
