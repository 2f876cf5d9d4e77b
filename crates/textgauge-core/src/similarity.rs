//! Surface similarity against a reference corpus.
//!
//! Uses Ratcliff/Obershelp pattern matching over characters: find the longest
//! common contiguous block, recurse on the unmatched text to its left and
//! right, and report `2·M / T` where `M` is the total matched length and `T`
//! the combined length of both strings.
//!
//! This is a lexical heuristic. It flags copied or lightly edited text; it
//! does not detect paraphrase, translation, or shared ideas, and unrelated
//! English text still shares short blocks (common words, spaces), so a
//! non-zero ratio alone means little.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Reference sentences used when no corpus is configured.
pub const DEFAULT_REFERENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Artificial intelligence is transforming the way we live and work.",
    "Climate change is one of the most pressing challenges facing humanity today.",
    "Education is the most powerful weapon which you can use to change the world.",
    "To be or not to be, that is the question.",
];

static BUILTIN: LazyLock<ReferenceCorpus> = LazyLock::new(|| ReferenceCorpus {
    entries: DEFAULT_REFERENCES
        .iter()
        .map(|entry| Reference::new(entry))
        .collect(),
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    text: String,
    folded: Vec<char>,
}

impl Reference {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            folded: text.to_lowercase().chars().collect(),
        }
    }
}

/// Ordered, immutable set of reference texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCorpus {
    entries: Vec<Reference>,
}

impl ReferenceCorpus {
    /// The bundled corpus, built once per process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a corpus from the given texts.
    ///
    /// Entries are trimmed and blank entries dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCorpus`] if no entry remains.
    pub fn new<I, S>(entries: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<Reference> = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .map(|e| Reference::new(&e))
            .collect();
        if entries.is_empty() {
            return Err(ConfigError::EmptyCorpus);
        }
        Ok(Self { entries })
    }

    /// Reference texts in order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.text.as_str())
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Best match of a document against the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimilarityScore {
    /// Highest similarity ratio in `[0.0, 1.0]`.
    pub ratio: f64,
    /// `ratio` scaled to `[0.0, 100.0]`.
    pub score: f64,
    /// Index of the best-matching reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_match: Option<usize>,
    /// Text of the best-matching reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Compare a document against every reference and keep the best ratio.
///
/// Ties keep the earliest reference.
#[tracing::instrument(skip_all, fields(text_len = document.len(), references = corpus.len()))]
pub fn score_similarity(document: &str, corpus: &ReferenceCorpus) -> SimilarityScore {
    let folded: Vec<char> = document.to_lowercase().chars().collect();
    let mut best = SimilarityScore::default();

    for (idx, reference) in corpus.entries.iter().enumerate() {
        let ratio = ratio_of(&folded, &reference.folded);
        if best.best_match.is_none() || ratio > best.ratio {
            best = SimilarityScore {
                ratio,
                score: ratio * 100.0,
                best_match: Some(idx),
                reference: Some(reference.text.clone()),
            };
        }
    }

    tracing::debug!(ratio = best.ratio, best_match = ?best.best_match, "similarity scored");
    best
}

/// Case-insensitive Ratcliff/Obershelp ratio of two strings.
///
/// Symmetric: `similarity_ratio(a, b) == similarity_ratio(b, a)`.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    ratio_of(&a, &b)
}

fn ratio_of(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    // Tie-breaking between equally long blocks depends on argument order,
    // so take the better of both orders.
    let matched = matching_chars(a, b).max(matching_chars(b, a));
    2.0 * matched as f64 / total as f64
}

/// Total length of the matching blocks found by recursive longest-match.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, alo, ahi, b, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, k)` with `a[i..i+k] == b[j..j+k]`. Among equally long
/// blocks the one starting earliest in `a`, then earliest in `b`, wins.
fn longest_match(
    a: &[char],
    alo: usize,
    ahi: usize,
    b: &[char],
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[col - 1] + 1;
                cur[col] = k;
                if k > best_k {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_k = k;
                }
            } else {
                cur[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    (best_i, best_j, best_k)
}
