#![allow(dead_code)]

//! Score report data model — the engine's only output surface.

use serde::{Deserialize, Serialize};

/// Identifies one scoring dimension. Serialized snake_case into the
/// per-category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Keywords,
    ActionVerbs,
    Metrics,
    Sections,
    Experience,
    Formatting,
    Education,
    Contact,
    Relevance,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Keywords => "keywords",
            CategoryKey::ActionVerbs => "action_verbs",
            CategoryKey::Metrics => "metrics",
            CategoryKey::Sections => "sections",
            CategoryKey::Experience => "experience",
            CategoryKey::Formatting => "formatting",
            CategoryKey::Education => "education",
            CategoryKey::Contact => "contact",
            CategoryKey::Relevance => "relevance",
        }
    }
}

/// Keyword overlap diagnostics. Lists are capped upstream so report size
/// stays bounded regardless of job-description length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDetail {
    pub matched_count: usize,
    pub total_keywords: usize,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub job_provided: bool,
}

/// Shared diagnostics for the tier-binned counters (verbs, metrics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierDetail {
    pub count: usize,
    pub recommended_min: usize,
}

/// Which résumé sections are populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPresence {
    pub personal: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub achievements: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDetail {
    pub present: SectionPresence,
    pub required_count: usize,
    pub required_total: usize,
    pub optional_count: usize,
    pub optional_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDetail {
    pub entry_count: usize,
    pub has_descriptions: bool,
    pub has_dates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingDetail {
    pub has_bullets: bool,
    pub has_section_headings: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationDetail {
    pub entry_count: usize,
    pub has_recent_end_year: bool,
    pub has_gpa: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    pub has_professional_email: bool,
    pub has_valid_phone: bool,
    pub has_profile_link: bool,
}

/// Keyword overlap counts per résumé sub-section against the job text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceDetail {
    pub skills_matches: usize,
    pub projects_matches: usize,
    pub summary_matches: usize,
    pub job_provided: bool,
}

/// Per-category diagnostics. Untagged: each category's detail struct has a
/// distinct field set, so the wire shape stays flat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryDetail {
    Keywords(KeywordDetail),
    Tier(TierDetail),
    Sections(SectionDetail),
    Experience(ExperienceDetail),
    Formatting(FormattingDetail),
    Education(EducationDetail),
    Contact(ContactDetail),
    Relevance(RelevanceDetail),
}

/// One scoring dimension's outcome. `points` never exceeds `max_points` and
/// is never negative (unsigned by construction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    pub key: CategoryKey,
    pub points: u32,
    pub max_points: u32,
    pub detail: CategoryDetail,
    pub suggestions: Vec<String>,
}

impl CategoryResult {
    /// Score as a fraction of the category maximum, for threshold checks.
    pub fn ratio(&self) -> f64 {
        if self.max_points == 0 {
            return 0.0;
        }
        f64::from(self.points) / f64::from(self.max_points)
    }
}

/// Full scoring output: bounded total, per-category breakdown in model
/// order, deduplicated tip list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: u32,
    pub model: String,
    pub breakdown: Vec<CategoryResult>,
    pub tips: Vec<String>,
}
