//! Sentence and word boundary detection.
//!
//! Works on borrowed slices of the input so callers can keep character
//! offsets into the original document.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::{is_abbreviation, is_title};

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]?$").expect("valid regex"));

/// Words that name a single-letter label ("vitamin A", "Plan B", "World War
/// I") rather than precede an initial.
const LETTER_LABELS: &[&str] = &[
    "appendix", "block", "building", "category", "chapter", "class", "column", "exhibit",
    "figure", "grade", "group", "hepatitis", "level", "model", "option", "part", "phase", "plan",
    "row", "section", "step", "table", "team", "type", "vitamin", "war", "wing",
];

/// A sentence located in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan<'a> {
    /// Trimmed sentence text, including its terminal punctuation.
    pub text: &'a str,
    /// Character offset of the first character of `text` in the source.
    pub char_start: usize,
}

/// A raw word located in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// The word with surrounding punctuation removed, case preserved.
    pub text: &'a str,
    /// Character offset of the word within the text it was extracted from.
    pub char_start: usize,
}

/// Split text into sentences with abbreviation, initial, decimal, URL, and
/// e-mail awareness.
///
/// A run of terminators (`?!`, `...`) is treated as a single boundary, and
/// closing quotes or brackets after the terminator stay with the sentence
/// they close.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<SentenceSpan<'_>> {
    let chars: Vec<char> = text.chars().collect();
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let is_last_of_run = chars
            .get(i + 1)
            .is_none_or(|next| !is_sentence_terminator(*next));

        if is_sentence_terminator(chars[i]) && is_last_of_run {
            let mut end = i + 1;
            while chars.get(end).is_some_and(|c| is_closer(*c)) {
                end += 1;
            }

            let context = extract_context(&chars, i, end);
            if is_sentence_boundary(&context) {
                push_span(text, &byte_at, start, end, &mut sentences);
                start = end;
                i = end;
                continue;
            }
        }

        i += 1;
    }

    push_span(text, &byte_at, start, chars.len(), &mut sentences);
    sentences
}

/// Split text into whitespace-delimited words, stripping surrounding
/// punctuation.
///
/// Internal apostrophes and hyphens survive (`don't`, `well-known`). Tokens
/// without a single letter (numbers, stray punctuation) are not words.
pub fn split_words(text: &str) -> Vec<WordSpan<'_>> {
    let mut words = Vec::new();
    let mut token_start: Option<(usize, usize)> = None;

    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((b, c)) = token_start.take() {
                push_word(&text[b..byte_idx], c, &mut words);
            }
        } else if token_start.is_none() {
            token_start = Some((byte_idx, char_idx));
        }
    }

    if let Some((b, c)) = token_start {
        push_word(&text[b..], c, &mut words);
    }

    words
}

fn push_word<'a>(token: &'a str, char_start: usize, words: &mut Vec<WordSpan<'a>>) {
    let leading = token
        .chars()
        .take_while(|c| !c.is_alphanumeric())
        .count();
    let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());

    if trimmed.chars().any(char::is_alphabetic) {
        words.push(WordSpan {
            text: trimmed,
            char_start: char_start + leading,
        });
    }
}

fn push_span<'a>(
    text: &'a str,
    byte_at: &[usize],
    start: usize,
    end: usize,
    sentences: &mut Vec<SentenceSpan<'a>>,
) {
    if start >= end {
        return;
    }
    let raw = &text[byte_at[start]..byte_at[end]];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading_bytes = raw.len() - raw.trim_start().len();
    sentences.push(SentenceSpan {
        text: trimmed,
        char_start: start + raw[..leading_bytes].chars().count(),
    });
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    /// The token preceding `word_before`, trailing periods kept.
    prev_word: String,
    /// The first token after the terminator, trailing periods kept.
    next_word: String,
    /// The character right after the terminator (and any closers).
    glued_after: Option<char>,
    /// The first non-whitespace character after the terminator.
    char_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize, end: usize) -> SentenceContext {
    let char_after = chars[end..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '(' | '[' | '\u{201c}'));

    let word_before = get_word_before(chars, pos);
    let word_start = pos - word_before.chars().count();
    let prev_end = chars[..word_start]
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |i| i + 1);
    let next_start = chars[end..]
        .iter()
        .position(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '(' | '[' | '\u{201c}'))
        .map_or(chars.len(), |i| end + i);

    SentenceContext {
        punctuation: chars[pos],
        prev_word: get_word_before(chars, prev_end),
        next_word: chars[next_start..]
            .iter()
            .take_while(|c| c.is_alphanumeric() || **c == '.')
            .collect(),
        word_before,
        glued_after: chars.get(end).copied(),
        char_after,
        is_end_of_text: chars[end..].iter().all(|c| c.is_whitespace()),
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut word_chars = Vec::new();
    let mut i = pos;

    while i > 0 {
        i -= 1;
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
    }

    word_chars.reverse();
    word_chars.into_iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // ! and ? end a sentence unless the text runs on in lowercase
    if context.punctuation != '.' {
        return !context.char_after.is_some_and(char::is_lowercase);
    }

    // Period glued to the next token: decimals, URLs, e-mail, "e.g.x"
    if context.glued_after.is_some_and(char::is_alphanumeric) {
        return false;
    }

    if is_title(&context.word_before) || is_likely_initial(context) {
        return false;
    }

    if let Some(next_char) = context.char_after {
        if next_char.is_uppercase() {
            return true;
        }
        if next_char.is_lowercase() {
            return false;
        }
    }

    !is_abbreviation(&context.word_before)
}

/// A lone capital before the period is an initial when it sits in a run of
/// initials ("J. K. Rowling") or leads into a capitalized name ("George W.
/// Bush"). A label letter ("vitamin A.") or the word "I" ends the sentence.
fn is_likely_initial(context: &SentenceContext) -> bool {
    let word = context.word_before.as_str();
    if word.contains('.') {
        return INITIALS_PATTERN.is_match(word);
    }
    if !is_single_capital(word) {
        return false;
    }

    let is_initial_token =
        |token: &str| token.ends_with('.') && is_single_capital(token.trim_end_matches('.'));
    if is_initial_token(context.prev_word.as_str())
        || is_initial_token(context.next_word.as_str())
    {
        return true;
    }

    let prev = context.prev_word.trim_end_matches('.').to_lowercase();
    if word == "I"
        || LETTER_LABELS.contains(&prev.as_str())
        || prev.chars().next().is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    context
        .next_word
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

fn is_single_capital(word: &str) -> bool {
    let mut letters = word.chars();
    letters.next().is_some_and(char::is_uppercase) && letters.next().is_none()
}
