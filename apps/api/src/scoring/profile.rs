//! Résumé profile — the flattened views the category scorers consume.
//!
//! Built either from a structured `Resume` (field concatenation) or
//! estimated from raw extracted text (heading-word patterns). Scorers never
//! touch transport or storage types directly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Resume;
use crate::scoring::report::SectionPresence;

static PERSONAL_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(email|phone|contact)\b").expect("personal heading pattern"));
static SUMMARY_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(summary|objective|profile)\b").expect("summary heading pattern"));
static EXPERIENCE_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(experience|work|employment)\b").expect("experience heading pattern")
});
static EDUCATION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(education|degree|university|college)\b").expect("education heading pattern")
});
static SKILLS_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(skills|competencies|technologies)\b").expect("skills heading pattern")
});
static PROJECTS_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bprojects?\b").expect("projects heading pattern"));
static ACHIEVEMENTS_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(achievements?|awards?|honors?)\b").expect("achievements heading pattern")
});

/// Flattened text views plus section presence.
#[derive(Debug, Clone)]
pub struct ResumeProfile {
    /// Every text-bearing field joined, in document order. Drives keyword
    /// matching and formatting checks.
    pub full_text: String,
    /// Experience and achievement text (descriptions plus titles). Drives
    /// the action-verb counter.
    pub verb_text: String,
    /// Experience, achievement, and project descriptions. Drives the
    /// quantitative-metric counter.
    pub metric_text: String,
    pub presence: SectionPresence,
}

impl ResumeProfile {
    pub fn from_resume(resume: &Resume) -> Self {
        let name_text = resume
            .personal
            .as_ref()
            .map(|p| format!("{} {}", p.first_name, p.last_name))
            .unwrap_or_default();

        let experience_full: Vec<String> = resume
            .experience
            .iter()
            .map(|e| format!("{} {}", e.position, e.description.as_deref().unwrap_or("")))
            .collect();
        let education_full: Vec<String> = resume
            .education
            .iter()
            .map(|e| format!("{} {}", e.degree, e.field.as_deref().unwrap_or("")))
            .collect();
        let skill_names: Vec<String> = resume.skills.iter().map(|s| s.name.clone()).collect();
        let project_full: Vec<String> = resume
            .projects
            .iter()
            .map(|p| format!("{} {}", p.name, p.description.as_deref().unwrap_or("")))
            .collect();
        let achievement_full: Vec<String> = resume
            .achievements
            .iter()
            .map(|a| format!("{} {}", a.title, a.description.as_deref().unwrap_or("")))
            .collect();

        let full_text = [
            name_text,
            resume.summary.clone().unwrap_or_default(),
            experience_full.join(" "),
            education_full.join(" "),
            skill_names.join(" "),
            project_full.join(" "),
            achievement_full.join(" "),
        ]
        .join(" ");

        let experience_verbs: Vec<String> = resume
            .experience
            .iter()
            .map(|e| format!("{} {}", e.description.as_deref().unwrap_or(""), e.position))
            .collect();
        let achievement_verbs: Vec<String> = resume
            .achievements
            .iter()
            .map(|a| format!("{} {}", a.description.as_deref().unwrap_or(""), a.title))
            .collect();
        let verb_text = format!(
            "{} {}",
            experience_verbs.join(" "),
            achievement_verbs.join(" ")
        );

        let metric_text = [
            resume
                .experience
                .iter()
                .map(|e| e.description.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" "),
            resume
                .achievements
                .iter()
                .map(|a| a.description.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" "),
            resume
                .projects
                .iter()
                .map(|p| p.description.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" "),
        ]
        .join(" ");

        let presence = SectionPresence {
            personal: resume
                .personal
                .as_ref()
                .map(|p| !p.email.trim().is_empty() || !p.first_name.trim().is_empty())
                .unwrap_or(false),
            summary: resume
                .summary
                .as_deref()
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false),
            experience: !resume.experience.is_empty(),
            education: !resume.education.is_empty(),
            skills: !resume.skills.is_empty(),
            projects: !resume.projects.is_empty(),
            achievements: !resume.achievements.is_empty(),
        };

        Self {
            full_text,
            verb_text,
            metric_text,
            presence,
        }
    }

    /// Best-effort profile from raw extracted text. Section presence is
    /// estimated from heading words; the counters run over the whole text.
    pub fn from_raw_text(text: &str) -> Self {
        let presence = SectionPresence {
            personal: PERSONAL_HEADING_RE.is_match(text),
            summary: SUMMARY_HEADING_RE.is_match(text),
            experience: EXPERIENCE_HEADING_RE.is_match(text),
            education: EDUCATION_HEADING_RE.is_match(text),
            skills: SKILLS_HEADING_RE.is_match(text),
            projects: PROJECTS_HEADING_RE.is_match(text),
            achievements: ACHIEVEMENTS_HEADING_RE.is_match(text),
        };

        Self {
            full_text: text.to_string(),
            verb_text: text.to_string(),
            metric_text: text.to_string(),
            presence,
        }
    }
}
