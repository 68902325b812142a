#![allow(dead_code)]

//! Scoring model configuration.
//!
//! Both observed scoring variants — the percentage-weighted 5-category model
//! and the point-based 7-category model — are presets of this one
//! table-driven shape: an ordered list of (category, point allocation)
//! pairs plus shared thresholds. Allocations always sum to 100, so the
//! aggregator only sums per-category points.

use serde::{Deserialize, Serialize};

use crate::scoring::report::CategoryKey;

/// Tuning knobs shared by the category scorers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum keyword token length for the overlap categories.
    pub keyword_min_length: usize,
    /// Minimum keyword token length for the job-relevance category.
    pub relevance_min_length: usize,
    /// Verb count considered the baseline for strong experience writing.
    pub min_action_verbs: usize,
    /// Metric count considered the baseline for measurable impact.
    pub min_metrics: usize,
    /// End years at or after this count as recent education.
    pub recent_education_year: i32,
    /// Categories under this fraction of their max attach suggestions.
    pub needs_improvement: f64,
    /// The section-presence category uses a stricter bar.
    pub sections_improvement: f64,
    /// Hard cap on the flattened tip list.
    pub max_tips: usize,
    /// Missing keywords quoted inside a tip string.
    pub max_missing_in_tips: usize,
    /// Matched/missing keyword lists carried in diagnostics.
    pub max_keyword_list: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            keyword_min_length: 3,
            relevance_min_length: 4,
            min_action_verbs: 3,
            min_metrics: 2,
            recent_education_year: 2020,
            needs_improvement: 0.6,
            sections_improvement: 0.7,
            max_tips: 20,
            max_missing_in_tips: 5,
            max_keyword_list: 10,
        }
    }
}

const WEIGHTED_ALLOCATIONS: &[(CategoryKey, u32)] = &[
    (CategoryKey::Keywords, 35),
    (CategoryKey::ActionVerbs, 15),
    (CategoryKey::Metrics, 20),
    (CategoryKey::Sections, 15),
    (CategoryKey::Experience, 15),
];

const INDUSTRY_ALLOCATIONS: &[(CategoryKey, u32)] = &[
    (CategoryKey::Keywords, 35),
    (CategoryKey::Sections, 20),
    (CategoryKey::Formatting, 15),
    (CategoryKey::Experience, 10),
    (CategoryKey::Education, 5),
    (CategoryKey::Contact, 5),
    (CategoryKey::Relevance, 10),
];

/// A named scoring preset: ordered category allocations plus thresholds.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    pub name: &'static str,
    pub allocations: &'static [(CategoryKey, u32)],
    pub thresholds: Thresholds,
}

impl ScoringModel {
    /// The canonical 5-category model: keyword overlap, action verbs,
    /// quantitative metrics, section presence, experience quality.
    pub fn weighted() -> Self {
        Self {
            name: "weighted",
            allocations: WEIGHTED_ALLOCATIONS,
            thresholds: Thresholds::default(),
        }
    }

    /// The 7-category industry point sheet: keyword overlap, sections,
    /// formatting, experience, education, contact quality, job relevance.
    pub fn industry() -> Self {
        Self {
            name: "industry",
            allocations: INDUSTRY_ALLOCATIONS,
            thresholds: Thresholds::default(),
        }
    }

    /// Resolves a preset by name. Unknown names return `None` so callers can
    /// reject rather than silently defaulting.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "weighted" => Some(Self::weighted()),
            "industry" => Some(Self::industry()),
            _ => None,
        }
    }

    pub fn total_allocation(&self) -> u32 {
        self.allocations.iter().map(|(_, points)| points).sum()
    }

    pub fn max_points(&self, key: CategoryKey) -> Option<u32> {
        self.allocations
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, points)| *points)
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::weighted()
    }
}
