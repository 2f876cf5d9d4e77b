//! Sentiment lexicon: word polarity weights and negators.
//!
//! Weights lie in `[-1.0, 1.0]`. Strong words sit near the ends of the
//! range, mild ones near `±0.3`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Built-in word weights.
pub static SENTIMENT_WEIGHTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Strongly positive
    map.extend([
        ("amazing", 0.9),
        ("awesome", 0.9),
        ("brilliant", 0.9),
        ("excellent", 0.9),
        ("exceptional", 0.9),
        ("fantastic", 0.9),
        ("incredible", 0.8),
        ("magnificent", 0.9),
        ("marvelous", 0.9),
        ("outstanding", 0.9),
        ("perfect", 0.9),
        ("phenomenal", 0.9),
        ("superb", 0.9),
        ("wonderful", 0.9),
        ("love", 0.8),
        ("loved", 0.8),
        ("loves", 0.8),
        ("delighted", 0.8),
        ("thrilled", 0.8),
        ("ecstatic", 0.9),
        ("best", 0.8),
        ("masterpiece", 0.9),
        ("extraordinary", 0.8),
    ]);

    // Positive
    map.extend([
        ("good", 0.5),
        ("great", 0.7),
        ("happy", 0.6),
        ("glad", 0.5),
        ("pleased", 0.5),
        ("enjoy", 0.5),
        ("enjoyed", 0.5),
        ("beautiful", 0.7),
        ("lovely", 0.6),
        ("pleasant", 0.5),
        ("nice", 0.4),
        ("fine", 0.3),
        ("helpful", 0.5),
        ("useful", 0.4),
        ("valuable", 0.5),
        ("effective", 0.5),
        ("efficient", 0.4),
        ("impressive", 0.6),
        ("successful", 0.6),
        ("success", 0.6),
        ("win", 0.5),
        ("winning", 0.5),
        ("benefit", 0.4),
        ("improve", 0.4),
        ("improved", 0.4),
        ("improvement", 0.4),
        ("clear", 0.3),
        ("easy", 0.3),
        ("friendly", 0.5),
        ("kind", 0.5),
        ("hope", 0.4),
        ("hopeful", 0.5),
        ("optimistic", 0.6),
        ("positive", 0.5),
        ("proud", 0.5),
        ("grateful", 0.6),
        ("thankful", 0.6),
        ("thanks", 0.4),
        ("recommend", 0.5),
        ("reliable", 0.5),
        ("smooth", 0.3),
        ("strong", 0.3),
        ("fun", 0.5),
        ("exciting", 0.6),
        ("excited", 0.6),
        ("inspiring", 0.6),
        ("creative", 0.4),
        ("innovative", 0.5),
        ("correct", 0.3),
        ("better", 0.4),
        ("calm", 0.3),
        ("comfortable", 0.4),
        ("confident", 0.5),
        ("liked", 0.3),
        ("satisfied", 0.5),
        ("worthwhile", 0.5),
        ("favorite", 0.5),
        ("fortunate", 0.5),
        ("safe", 0.3),
    ]);

    // Strongly negative
    map.extend([
        ("awful", -0.9),
        ("terrible", -0.9),
        ("horrible", -0.9),
        ("dreadful", -0.9),
        ("disgusting", -0.9),
        ("atrocious", -0.9),
        ("abysmal", -0.9),
        ("appalling", -0.9),
        ("hate", -0.8),
        ("hated", -0.8),
        ("hates", -0.8),
        ("worst", -0.9),
        ("disaster", -0.8),
        ("disastrous", -0.9),
        ("catastrophic", -0.9),
        ("furious", -0.8),
        ("miserable", -0.8),
        ("pathetic", -0.8),
        ("useless", -0.7),
        ("hopeless", -0.7),
    ]);

    // Negative
    map.extend([
        ("bad", -0.5),
        ("poor", -0.5),
        ("sad", -0.5),
        ("unhappy", -0.6),
        ("angry", -0.6),
        ("annoyed", -0.4),
        ("annoying", -0.5),
        ("boring", -0.5),
        ("broken", -0.5),
        ("confusing", -0.4),
        ("confused", -0.3),
        ("difficult", -0.3),
        ("disappointed", -0.6),
        ("disappointing", -0.6),
        ("fail", -0.6),
        ("failed", -0.6),
        ("failure", -0.6),
        ("fear", -0.5),
        ("afraid", -0.4),
        ("worried", -0.4),
        ("worry", -0.4),
        ("problem", -0.3),
        ("problems", -0.3),
        ("issue", -0.2),
        ("wrong", -0.4),
        ("worse", -0.6),
        ("weak", -0.3),
        ("slow", -0.3),
        ("ugly", -0.6),
        ("hurt", -0.5),
        ("pain", -0.5),
        ("painful", -0.6),
        ("harm", -0.5),
        ("harmful", -0.6),
        ("danger", -0.5),
        ("dangerous", -0.6),
        ("crisis", -0.6),
        ("loss", -0.5),
        ("lose", -0.4),
        ("lost", -0.4),
        ("negative", -0.5),
        ("pessimistic", -0.6),
        ("unfortunately", -0.4),
        ("unfair", -0.5),
        ("mess", -0.4),
        ("messy", -0.4),
        ("dislike", -0.5),
        ("complain", -0.4),
        ("complaint", -0.4),
        ("frustrating", -0.6),
        ("frustrated", -0.6),
        ("stressful", -0.5),
        ("tired", -0.3),
        ("lonely", -0.5),
        ("cruel", -0.8),
        ("unreliable", -0.5),
        ("threat", -0.5),
        ("mediocre", -0.4),
        ("regret", -0.5),
    ]);

    map
});

/// Words that flip the polarity of a sentiment word that follows closely.
pub static NEGATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "hardly",
        "barely", "scarcely", "without", "cannot", "can't", "don't", "doesn't", "didn't", "isn't",
        "aren't", "wasn't", "weren't", "won't", "wouldn't", "shouldn't", "couldn't", "haven't",
        "hasn't", "hadn't", "ain't",
    ]
    .into_iter()
    .collect()
});
