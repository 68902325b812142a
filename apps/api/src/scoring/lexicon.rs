//! Immutable lookup tables used by the scoring engine.
//!
//! Built once behind `Lazy` statics so per-request scoring never
//! reconstructs them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words excluded from keyword extraction.
const STOP_WORD_LIST: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
    "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just", "now",
    "then", "there", "their", "them", "its", "into", "about", "over", "under", "between", "also",
    "any", "because", "while", "during", "through",
];

/// Achievement-oriented verbs counted as a proxy for strong writing.
const ACTION_VERB_LIST: &[&str] = &[
    "achieved", "acted", "adapted", "administered", "advanced", "advised", "allocated",
    "analyzed", "applied", "appointed", "approved", "architected", "assembled", "assessed",
    "assigned", "attained", "authored", "automated", "balanced", "built", "calculated",
    "catalyzed", "championed", "changed", "clarified", "closed", "coached", "collaborated",
    "collected", "communicated", "completed", "composed", "computed", "conceived", "conducted",
    "configured", "consolidated", "constructed", "consulted", "contracted", "contributed",
    "controlled", "converted", "coordinated", "created", "critiqued", "customized", "decreased",
    "delegated", "delivered", "demonstrated", "designed", "determined", "developed", "devised",
    "directed", "discovered", "distributed", "dramatized", "drove", "earned", "edited",
    "educated", "elected", "elicited", "eliminated", "emphasized", "employed", "enabled",
    "enforced", "engineered", "enhanced", "enlarged", "enlisted", "ensured", "established",
    "evaluated", "examined", "exceeded", "executed", "expanded", "expedited", "experimented",
    "explained", "explored", "exported", "extracted", "facilitated", "fashioned", "focused",
    "forecasted", "formed", "formulated", "fostered", "founded", "generated", "governed",
    "grouped", "guided", "headed", "helped", "hired", "honed", "hosted", "hypothesized",
    "identified", "illustrated", "implemented", "improved", "increased", "influenced",
    "informed", "initiated", "innovated", "inspected", "inspired", "installed", "instituted",
    "instructed", "integrated", "interpreted", "interviewed", "introduced", "invented",
    "investigated", "invited", "involved", "joined", "judged", "justified", "launched", "led",
    "lectured", "lobbied", "located", "logged", "maintained", "managed", "manipulated",
    "mapped", "marketed", "mastered", "matched", "maximized", "measured", "mediated", "merged",
    "minimized", "modeled", "moderated", "modernized", "modified", "monitored", "motivated",
    "moved", "named", "navigated", "negotiated", "nominated", "operated", "optimized",
    "orchestrated", "organized", "originated", "overhauled", "oversaw", "participated",
    "partnered", "performed", "persuaded", "pioneered", "planned", "positioned", "prepared",
    "presented", "presided", "prioritized", "processed", "produced", "programmed", "projected",
    "promoted", "proposed", "proved", "provided", "publicized", "published", "purchased",
    "pursued", "qualified", "quantified", "questioned", "raised", "ran", "ranked", "rated",
    "realized", "received", "recognized", "recommended", "reconciled", "recorded", "recruited",
    "redesigned", "reduced", "referred", "refined", "regulated", "reinforced", "rejected",
    "related", "remedied", "remodeled", "reorganized", "repaired", "replaced", "reported",
    "represented", "researched", "resolved", "responded", "restored", "restructured",
    "retained", "retrieved", "revamped", "reviewed", "revised", "revitalized", "scheduled",
    "secured", "selected", "separated", "served", "serviced", "set", "shaped", "shared",
    "showed", "signaled", "simplified", "simulated", "sold", "solved", "sorted", "sought",
    "sparked", "sponsored", "standardized", "started", "stimulated", "stopped", "strengthened",
    "stressed", "stretched", "structured", "studied", "submitted", "substituted", "succeeded",
    "suggested", "summarized", "supervised", "supplied", "supported", "surpassed", "surveyed",
    "sustained", "synthesized", "systematized", "tabulated", "tailored", "taught", "teamed",
    "terminated", "tested", "tightened", "tolerated", "touched", "trained", "transcended",
    "transferred", "transformed", "translated", "transmitted", "traveled", "treated",
    "trimmed", "tripled", "troubleshot", "trusted", "turned", "uncovered", "understood",
    "unified", "united", "unveiled", "updated", "upgraded", "used", "utilized", "validated",
    "valued", "verified", "viewed", "visited", "volunteered", "waged", "won", "worked",
    "wrote",
];

/// Mainstream mail providers treated as professional by default.
const KNOWN_EMAIL_PROVIDER_LIST: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "protonmail.com",
    "mail.com",
    "zoho.com",
    "aol.com",
];

/// Tokens that make an address read as casual rather than professional.
const CASUAL_EMAIL_TOKEN_LIST: &[&str] = &["coolkid", "awesome", "l33t", "hacker", "ninja", "pro"];

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

static ACTION_VERBS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ACTION_VERB_LIST.iter().copied().collect());

static KNOWN_EMAIL_PROVIDERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| KNOWN_EMAIL_PROVIDER_LIST.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn is_action_verb(word: &str) -> bool {
    ACTION_VERBS.contains(word)
}

pub fn is_known_email_provider(domain: &str) -> bool {
    KNOWN_EMAIL_PROVIDERS.contains(domain)
}

/// True when the address contains a token from the casual denylist.
/// Checked against the whole lowercased address, not just the local part.
pub fn has_casual_email_token(email_lower: &str) -> bool {
    CASUAL_EMAIL_TOKEN_LIST
        .iter()
        .any(|token| email_lower.contains(token))
}
