//! Dictionaries for text analysis.
//!
//! Curated word sets used by sentence splitting, difficult-word detection,
//! and tone scoring. All sets are built lazily once per process and never
//! mutated afterwards.

pub mod abbreviations;
pub mod common_words;
pub mod sentiment;
