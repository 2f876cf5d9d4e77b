//! Familiar-word list used for Dale-Chall style difficulty scoring.
//!
//! Roughly 3000 words that most fourth-grade readers know. The list ships
//! with the crate (`data/common_words.txt`) and is parsed once on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

const RAW: &str = include_str!("../../data/common_words.txt");

/// The familiar-word set, lowercase.
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    RAW.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .collect()
});

/// Check whether a word is on the familiar-word list (case-insensitive).
pub fn is_common(word: &str) -> bool {
    if word.chars().any(char::is_uppercase) {
        COMMON_WORDS.contains(word.to_lowercase().as_str())
    } else {
        COMMON_WORDS.contains(word)
    }
}
