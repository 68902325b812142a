//! Text normalization — turns free text into keyword sets.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::scoring::lexicon::is_stop_word;

/// Maximal lowercase alphabetic runs. Length filtering happens after
/// matching so one compiled pattern serves every `min_length`.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").expect("word pattern"));

/// Extracts the keyword set from `text`: lowercased alphabetic tokens of at
/// least `min_length` characters, with stop words removed. Duplicates and
/// order are irrelevant; empty input yields an empty set.
pub fn extract_keywords(text: &str, min_length: usize) -> HashSet<String> {
    if text.is_empty() {
        return HashSet::new();
    }

    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.len() >= min_length && !is_stop_word(w))
        .map(str::to_string)
        .collect()
}

/// Lowercase alphabetic tokens of `text` in document order, no filtering.
/// Used by the metric counters, which need repeats preserved.
pub fn tokenize_words(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_empty_set() {
        assert!(extract_keywords("", 3).is_empty());
    }

    #[test]
    fn test_lowercases_and_filters_stop_words() {
        let keywords = extract_keywords("The Senior Rust Engineer and the team", 3);
        assert!(keywords.contains("senior"));
        assert!(keywords.contains("rust"));
        assert!(keywords.contains("engineer"));
        assert!(keywords.contains("team"));
        assert!(!keywords.contains("the"));
        assert!(!keywords.contains("and"));
    }

    #[test]
    fn test_min_length_excludes_short_tokens() {
        let keywords = extract_keywords("go is ok but kubernetes rocks", 3);
        assert!(!keywords.contains("go"));
        assert!(!keywords.contains("ok"));
        assert!(keywords.contains("kubernetes"));
    }

    #[test]
    fn test_min_length_four() {
        let keywords = extract_keywords("sql java python", 4);
        assert!(!keywords.contains("sql"));
        assert!(keywords.contains("java"));
        assert!(keywords.contains("python"));
    }

    #[test]
    fn test_digits_break_tokens() {
        // "web3" is not a pure alphabetic run; only "web" survives and is
        // then dropped by the length filter at min_length 4.
        let keywords = extract_keywords("web3 platforms", 4);
        assert!(!keywords.contains("web3"));
        assert!(keywords.contains("platforms"));
    }

    #[test]
    fn test_set_semantics_dedupe() {
        let keywords = extract_keywords("rust rust rust", 3);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_tokenize_preserves_repeats() {
        let words = tokenize_words("Led and led again");
        assert_eq!(words.iter().filter(|w| *w == "led").count(), 2);
    }
}
