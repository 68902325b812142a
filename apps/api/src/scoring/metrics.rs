//! Metric counters — pattern-matched proxies for achievement-oriented
//! writing and measurable impact.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::lexicon::is_action_verb;
use crate::scoring::normalize::tokenize_words;

/// Ordered quantitative patterns. A span matching two patterns counts twice:
/// the sum is a density proxy, not a precise count, and the overlap is part
/// of the pinned behavior.
static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",                                                   // percentages
        r"\$\d+(?:,\d{3})*(?:\.\d+)?",                             // currency amounts
        r"(?i)\d+(?:\.\d+)?[x×]",                                  // multipliers (2x, 3.5x)
        r"(?i)\d+(?:\.\d+)?\s*(?:million|billion|thousand|k|M|B)", // magnitude words
        r"(?i)\d+(?:\.\d+)?\s*(?:years?|months?|weeks?|days?)",    // time spans
        r"(?i)\d+(?:\.\d+)?\s*(?:people|users|customers|clients|team|employees)",
        r"(?i)\d+(?:\.\d+)?\s*(?:points?|units?|items?|projects?|features?)",
        r"\d+/\d+",                                                // ratios (3/5)
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric pattern"))
    .collect()
});

/// 3+ digit integers or decimals not targeted by a specific pattern above.
/// May re-count digits already matched (e.g. inside a 3-digit percentage);
/// an accepted imprecision of the heuristic.
static STANDALONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3,}\b|\b\d+\.\d+\b").expect("standalone number pattern"));

/// Counts action-verb occurrences in `text`. Case-insensitive; repeated
/// occurrences of the same verb each count.
pub fn count_action_verbs(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    tokenize_words(text)
        .iter()
        .filter(|word| is_action_verb(word))
        .count()
}

/// Counts quantitative markers in `text` by summing match counts across all
/// patterns, then adding standalone numbers.
pub fn count_quantitative_metrics(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let pattern_matches: usize = METRIC_PATTERNS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();

    pattern_matches + STANDALONE_NUMBER_RE.find_iter(text).count()
}
