//! Document tokenization.
//!
//! [`tokenize`] runs once per request and produces a read-only [`Tokens`]
//! view that every scorer consumes. Sentences without a single word (stray
//! punctuation, bare numbers) are dropped, so an input with no letters
//! yields zero sentences and zero words.

use serde::Serialize;

use crate::dictionaries::common_words;
use crate::syllables::count_syllables;
use crate::text;

/// Words with at least this many syllables count as complex.
pub const COMPLEX_SYLLABLES: usize = 3;

/// A single word of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// The word as written, punctuation stripped.
    pub text: String,
    /// Case-folded form used for lookups and counting. Typographic
    /// apostrophes are folded to `'`.
    pub lower: String,
    /// Estimated syllable count (at least 1).
    pub syllables: usize,
    /// Not on the familiar-word list and longer than two syllables.
    pub difficult: bool,
    /// Character offset of the word in the document.
    pub char_start: usize,
    /// Character offset one past the last character of the word.
    pub char_end: usize,
}

impl Word {
    fn new(text: &str, char_start: usize) -> Self {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let syllables = count_syllables(text);
        let difficult = syllables >= COMPLEX_SYLLABLES && !common_words::is_common(&lower);
        Self {
            text: text.to_string(),
            lower,
            syllables,
            difficult,
            char_start,
            char_end: char_start + text.chars().count(),
        }
    }

    /// Whether the word has three or more syllables.
    pub const fn is_complex(&self) -> bool {
        self.syllables >= COMPLEX_SYLLABLES
    }

    /// Number of alphanumeric characters in the word.
    pub fn alphanumeric_len(&self) -> usize {
        self.text.chars().filter(|c| c.is_alphanumeric()).count()
    }

    /// Number of letters in the word.
    pub fn letter_len(&self) -> usize {
        self.text.chars().filter(|c| c.is_alphabetic()).count()
    }
}

/// One sentence and its words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// The sentence as written, trimmed.
    pub text: String,
    /// Words in document order (never empty).
    pub words: Vec<Word>,
}

/// Tokenized view of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokens {
    /// Sentences in document order.
    pub sentences: Vec<Sentence>,
}

impl Tokens {
    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }

    /// All words in document order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flat_map(|s| s.words.iter())
    }

    /// Total syllables across all words.
    pub fn syllable_count(&self) -> usize {
        self.words().map(|w| w.syllables).sum()
    }

    /// Whether tokenization found nothing to score.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Tokenize a document into sentences and annotated words.
#[tracing::instrument(skip(document), fields(text_len = document.len()))]
pub fn tokenize(document: &str) -> Tokens {
    let sentences: Vec<Sentence> = text::split_sentences(document)
        .into_iter()
        .filter_map(|span| {
            let words: Vec<Word> = text::split_words(span.text)
                .into_iter()
                .map(|w| Word::new(w.text, span.char_start + w.char_start))
                .collect();
            (!words.is_empty()).then(|| Sentence {
                text: span.text.to_string(),
                words,
            })
        })
        .collect();

    let tokens = Tokens { sentences };
    tracing::debug!(
        sentences = tokens.sentence_count(),
        words = tokens.word_count(),
        "tokenized document"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_sentence() {
        let tokens = tokenize("The cat sat.");
        assert_eq!(tokens.sentence_count(), 1);
        assert_eq!(tokens.word_count(), 3);
        assert_eq!(tokens.syllable_count(), 3);
    }

    #[test]
    fn words_keep_case_and_fold_for_counting() {
        let tokens = tokenize("Hello World.");
        let words: Vec<_> = tokens.words().collect();
        assert_eq!(words[0].text, "Hello");
        assert_eq!(words[0].lower, "hello");
    }

    #[test]
    fn curly_apostrophes_fold_in_lowercase_form() {
        let tokens = tokenize("It isn\u{2019}t late.");
        let words: Vec<_> = tokens.words().collect();
        assert_eq!(words[1].text, "isn\u{2019}t");
        assert_eq!(words[1].lower, "isn't");
    }

    #[test]
    fn difficult_words_need_three_syllables_and_unfamiliarity() {
        let tokens = tokenize("The infrastructure was beautiful and tidy.");
        let difficult: Vec<_> = tokens
            .words()
            .filter(|w| w.difficult)
            .map(|w| w.lower.as_str())
            .collect();
        assert_eq!(difficult, vec!["infrastructure"]);
    }

    #[test]
    fn word_offsets_index_the_document() {
        let doc = "One two. Three four.";
        let tokens = tokenize(doc);
        let chars: Vec<char> = doc.chars().collect();
        let three = tokens.words().find(|w| w.lower == "three").unwrap();
        assert_eq!(three.char_start, 9);
        assert_eq!(three.char_end, 14);
        assert_eq!(chars[three.char_start], 'T');
    }

    #[test]
    fn empty_and_non_alphabetic_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        let tokens = tokenize("123 456. !!! ???");
        assert!(tokens.is_empty());
        assert_eq!(tokens.word_count(), 0);
    }

    #[test]
    fn letter_and_alphanumeric_lengths() {
        let tokens = tokenize("Route 66b is fine.");
        let word = tokens.words().find(|w| w.lower == "66b").unwrap();
        assert_eq!(word.alphanumeric_len(), 3);
        assert_eq!(word.letter_len(), 1);
    }
}
