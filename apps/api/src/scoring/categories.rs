//! Category scorers — one pure function per scoring dimension.
//!
//! Every scorer emits a `CategoryResult` whose points are an integer in
//! [0, max_points]. Rational scores use integer floor division so
//! "truncate, never round" holds exactly; tier-binned scores use whole
//! percentages for the same reason.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{Education, Experience, Personal, Resume};
use crate::scoring::lexicon::{has_casual_email_token, is_known_email_provider};
use crate::scoring::metrics::{count_action_verbs, count_quantitative_metrics};
use crate::scoring::model::Thresholds;
use crate::scoring::normalize::extract_keywords;
use crate::scoring::profile::ResumeProfile;
use crate::scoring::report::{
    CategoryDetail, CategoryKey, CategoryResult, ContactDetail, EducationDetail,
    ExperienceDetail, FormattingDetail, KeywordDetail, RelevanceDetail, SectionDetail,
    SectionPresence, TierDetail,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-*]\s+").expect("bullet pattern"));
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(experience|education|skills|summary|projects)\b").expect("heading pattern")
});
static FOUR_DIGIT_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("year pattern"));

/// Floor of `numer / denom × max_points`, clamped to the category maximum.
fn fraction_points(numer: u64, denom: u64, max_points: u32) -> u32 {
    if denom == 0 {
        return 0;
    }
    let points = numer * u64::from(max_points) / denom;
    (points as u32).min(max_points)
}

/// Bins a count against its configured minimum into whole-percent tiers.
/// Boundary counts land in the higher tier.
fn tier_percent(count: usize, minimum: usize) -> u32 {
    if count >= minimum * 3 {
        100
    } else if count >= minimum * 2 {
        80
    } else if count >= minimum {
        60
    } else if count > 0 {
        40
    } else {
        20
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword match
// ────────────────────────────────────────────────────────────────────────────

/// Overlap between job-description keywords and résumé keywords. With no
/// job text (or a job text that yields no keywords) the category scores its
/// neutral midpoint rather than penalizing the résumé.
pub fn score_keywords(
    full_text: &str,
    job_desc: Option<&str>,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let job_desc = job_desc.unwrap_or("").trim();

    if job_desc.is_empty() {
        return CategoryResult {
            key: CategoryKey::Keywords,
            points: max_points / 2,
            max_points,
            detail: CategoryDetail::Keywords(KeywordDetail {
                matched_count: 0,
                total_keywords: 0,
                matched_keywords: vec![],
                missing_keywords: vec![],
                job_provided: false,
            }),
            suggestions: vec!["Add a job description to get keyword matching analysis".to_string()],
        };
    }

    let job_keywords = extract_keywords(job_desc, thresholds.keyword_min_length);
    let resume_keywords = extract_keywords(full_text, thresholds.keyword_min_length);

    let mut matched: Vec<String> = job_keywords.intersection(&resume_keywords).cloned().collect();
    let mut missing: Vec<String> = job_keywords.difference(&resume_keywords).cloned().collect();
    // Sets iterate in arbitrary order; sort so identical input yields an
    // identical report.
    matched.sort();
    missing.sort();

    let total = job_keywords.len();
    let matched_count = matched.len();

    let points = if total == 0 {
        max_points / 2
    } else {
        fraction_points(matched_count as u64, total as u64, max_points)
    };

    let mut suggestions = Vec::new();
    let ratio = if max_points == 0 {
        0.0
    } else {
        f64::from(points) / f64::from(max_points)
    };
    if total > 0 && ratio < thresholds.needs_improvement {
        if missing.is_empty() {
            suggestions.push("Improve keyword matching with the job description".to_string());
        } else {
            let quoted: Vec<&str> = missing
                .iter()
                .take(thresholds.max_missing_in_tips)
                .map(String::as_str)
                .collect();
            suggestions.push(format!(
                "Add these keywords from the job description: {}",
                quoted.join(", ")
            ));
            suggestions.push(
                "Use keywords naturally in experience descriptions".to_string(),
            );
        }
    }

    matched.truncate(thresholds.max_keyword_list);
    missing.truncate(thresholds.max_keyword_list);

    CategoryResult {
        key: CategoryKey::Keywords,
        points,
        max_points,
        detail: CategoryDetail::Keywords(KeywordDetail {
            matched_count,
            total_keywords: total,
            matched_keywords: matched,
            missing_keywords: missing,
            job_provided: true,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Action verbs / quantitative metrics (tier-binned counters)
// ────────────────────────────────────────────────────────────────────────────

pub fn score_action_verbs(
    verb_text: &str,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let count = count_action_verbs(verb_text);
    let percent = tier_percent(count, thresholds.min_action_verbs);
    let points = fraction_points(u64::from(percent), 100, max_points);

    let mut suggestions = Vec::new();
    if percent < 60 {
        suggestions.push(format!(
            "Use more action verbs in your experience section (found {count}, recommended: {}+)",
            thresholds.min_action_verbs
        ));
        suggestions.push(
            "Start bullet points with action verbs like 'achieved', 'developed', 'managed', 'led'"
                .to_string(),
        );
    }

    CategoryResult {
        key: CategoryKey::ActionVerbs,
        points,
        max_points,
        detail: CategoryDetail::Tier(TierDetail {
            count,
            recommended_min: thresholds.min_action_verbs,
        }),
        suggestions,
    }
}

pub fn score_metrics(
    metric_text: &str,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let count = count_quantitative_metrics(metric_text);
    let percent = tier_percent(count, thresholds.min_metrics);
    let points = fraction_points(u64::from(percent), 100, max_points);

    let mut suggestions = Vec::new();
    if percent < 60 {
        suggestions.push(format!(
            "Add quantitative metrics to your resume (found {count}, recommended: {}+)",
            thresholds.min_metrics
        ));
        suggestions.push(
            "Include numbers, percentages, and specific achievements (e.g., 'increased sales by 30%', 'managed team of 5')"
                .to_string(),
        );
    }

    CategoryResult {
        key: CategoryKey::Metrics,
        points,
        max_points,
        detail: CategoryDetail::Tier(TierDetail {
            count,
            recommended_min: thresholds.min_metrics,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section presence
// ────────────────────────────────────────────────────────────────────────────

const REQUIRED_SECTIONS: &[&str] = &["personal", "experience", "skills"];
const OPTIONAL_SECTIONS: &[&str] = &["summary", "education", "projects", "achievements"];

fn section_flag(presence: &SectionPresence, name: &str) -> bool {
    match name {
        "personal" => presence.personal,
        "summary" => presence.summary,
        "experience" => presence.experience,
        "education" => presence.education,
        "skills" => presence.skills,
        "projects" => presence.projects,
        "achievements" => presence.achievements,
        _ => false,
    }
}

/// Weighted fraction of populated sections: required sections carry 70% of
/// the category, optional sections 30%.
pub fn score_sections(
    presence: &SectionPresence,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let required_count = REQUIRED_SECTIONS
        .iter()
        .filter(|s| section_flag(presence, s))
        .count();
    let optional_count = OPTIONAL_SECTIONS
        .iter()
        .filter(|s| section_flag(presence, s))
        .count();

    let required_total = REQUIRED_SECTIONS.len();
    let optional_total = OPTIONAL_SECTIONS.len();

    // ratio = 0.7·(required/3) + 0.3·(optional/4), kept rational:
    // (280·required + 90·optional) / 1200.
    let numer = 280 * required_count as u64 + 90 * optional_count as u64;
    let points = fraction_points(numer, 1200, max_points);

    let mut suggestions = Vec::new();
    let ratio = numer as f64 / 1200.0;
    if ratio < thresholds.sections_improvement {
        let missing_required: Vec<&str> = REQUIRED_SECTIONS
            .iter()
            .filter(|s| !section_flag(presence, s))
            .copied()
            .collect();
        if !missing_required.is_empty() {
            suggestions.push(format!(
                "Add missing required sections: {}",
                missing_required.join(", ")
            ));
        }
        let missing_optional: Vec<&str> = OPTIONAL_SECTIONS
            .iter()
            .filter(|s| !section_flag(presence, s))
            .take(2)
            .copied()
            .collect();
        if !missing_optional.is_empty() {
            suggestions.push(format!("Consider adding: {}", missing_optional.join(", ")));
        }
    }

    CategoryResult {
        key: CategoryKey::Sections,
        points,
        max_points,
        detail: CategoryDetail::Sections(SectionDetail {
            present: presence.clone(),
            required_count,
            required_total,
            optional_count,
            optional_total,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience quality
// ────────────────────────────────────────────────────────────────────────────

/// Additive completeness bundle on a 100 scale: any entry 30, any
/// description 35, any start date 20, three or more entries 15. Zero entries
/// short-circuit to zero with a suggestion.
pub fn score_experience(
    experience: &[Experience],
    max_points: u32,
    _thresholds: &Thresholds,
) -> CategoryResult {
    if experience.is_empty() {
        return CategoryResult {
            key: CategoryKey::Experience,
            points: 0,
            max_points,
            detail: CategoryDetail::Experience(ExperienceDetail {
                entry_count: 0,
                has_descriptions: false,
                has_dates: false,
            }),
            suggestions: vec!["Add work experience entries".to_string()],
        };
    }

    let entry_count = experience.len();
    let has_descriptions = experience
        .iter()
        .any(|e| e.description.as_deref().is_some_and(|d| !d.trim().is_empty()));
    let has_dates = experience
        .iter()
        .any(|e| e.start_date.as_deref().is_some_and(|d| !d.trim().is_empty()));

    let mut bundle: u64 = 30;
    if has_descriptions {
        bundle += 35;
    }
    if has_dates {
        bundle += 20;
    }
    if entry_count >= 3 {
        bundle += 15;
    }
    let bundle = bundle.min(100);
    let points = fraction_points(bundle, 100, max_points);

    let mut suggestions = Vec::new();
    if bundle < 60 {
        if !has_descriptions {
            suggestions.push("Add detailed descriptions to your work experience".to_string());
        }
        if !has_dates {
            suggestions.push("Include dates for your work experience".to_string());
        }
        if entry_count < 2 {
            suggestions.push("Add more work experience entries if available".to_string());
        }
    }

    CategoryResult {
        key: CategoryKey::Experience,
        points,
        max_points,
        detail: CategoryDetail::Experience(ExperienceDetail {
            entry_count,
            has_descriptions,
            has_dates,
        }),
        suggestions,
    }
}

/// Raw-text estimate of experience quality: 50 for a detected experience
/// heading, 30 more when the verb count clears its minimum, 20 more when the
/// metric count clears its minimum.
pub fn score_experience_from_text(
    profile: &ResumeProfile,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let has_experience = profile.presence.experience;
    let verb_count = count_action_verbs(&profile.verb_text);
    let metric_count = count_quantitative_metrics(&profile.metric_text);

    let mut bundle: u64 = 0;
    if has_experience {
        bundle += 50;
        if verb_count >= thresholds.min_action_verbs {
            bundle += 30;
        }
    }
    if metric_count >= thresholds.min_metrics {
        bundle += 20;
    }
    let bundle = bundle.min(100);
    let points = fraction_points(bundle, 100, max_points);

    let suggestions = if has_experience {
        vec![]
    } else {
        vec!["Add work experience entries".to_string()]
    };

    CategoryResult {
        key: CategoryKey::Experience,
        points,
        max_points,
        detail: CategoryDetail::Experience(ExperienceDetail {
            entry_count: usize::from(has_experience),
            has_descriptions: has_experience,
            has_dates: FOUR_DIGIT_YEAR_RE.is_match(&profile.full_text),
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting / readability
// ────────────────────────────────────────────────────────────────────────────

/// Best-effort formatting bundle on a 15 scale. The true visual format is
/// not observable from extracted text, so unprovable properties grant base
/// points: simple fonts 4, no tables or text boxes 4, selectable-text
/// partial credit 1. Observable signals add bullet characters 3 and
/// recognized section headings 1.
pub fn score_formatting(
    full_text: &str,
    max_points: u32,
    _thresholds: &Thresholds,
) -> CategoryResult {
    let has_bullets = BULLET_RE.is_match(full_text);
    let has_section_headings = HEADING_RE.is_match(full_text);

    let mut bundle: u64 = 4 + 4 + 1;
    if has_bullets {
        bundle += 3;
    }
    if has_section_headings {
        bundle += 1;
    }
    let points = fraction_points(bundle, 15, max_points);

    let mut suggestions = Vec::new();
    if !has_bullets {
        suggestions
            .push("Use consistent bullet points (•) in experience descriptions".to_string());
    }
    if !has_section_headings {
        suggestions.push(
            "Ensure section headings are clearly labeled (Experience, Education, Skills)"
                .to_string(),
        );
    }
    if bundle < 12 {
        suggestions
            .push("Use simple, ATS-friendly fonts (Roboto, Lato, Calibri, Helvetica)".to_string());
        suggestions.push(
            "Avoid text boxes, tables, and columns - use single column layout".to_string(),
        );
    }

    CategoryResult {
        key: CategoryKey::Formatting,
        points,
        max_points,
        detail: CategoryDetail::Formatting(FormattingDetail {
            has_bullets,
            has_section_headings,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education relevance
// ────────────────────────────────────────────────────────────────────────────

/// Leading `-`-delimited year token of a free-text date, if it parses.
/// Malformed strings are tolerated by returning `None`.
fn leading_year(date: &str) -> Option<i32> {
    date.split('-').next()?.trim().parse::<i32>().ok()
}

fn has_recent_end_year(education: &[Education], cutoff: i32) -> bool {
    education
        .iter()
        .filter_map(|e| e.end_date.as_deref())
        .filter_map(leading_year)
        .any(|year| year >= cutoff)
}

/// Education bundle on a 5 scale: degree entry 3, recent end year 1, GPA 1.
pub fn score_education(
    education: &[Education],
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    if education.is_empty() {
        return CategoryResult {
            key: CategoryKey::Education,
            points: 0,
            max_points,
            detail: CategoryDetail::Education(EducationDetail {
                entry_count: 0,
                has_recent_end_year: false,
                has_gpa: false,
            }),
            suggestions: vec!["Add an education section".to_string()],
        };
    }

    let has_recent = has_recent_end_year(education, thresholds.recent_education_year);
    let has_gpa = education
        .iter()
        .any(|e| e.gpa.as_deref().is_some_and(|g| !g.trim().is_empty()));

    let mut bundle: u64 = 3;
    if has_recent {
        bundle += 1;
    }
    if has_gpa {
        bundle += 1;
    }
    let points = fraction_points(bundle, 5, max_points);

    let mut suggestions = Vec::new();
    if !has_gpa {
        suggestions.push(
            "Consider adding GPA or percentage if it's strong (above 3.5 or 80%+)".to_string(),
        );
    }
    if !has_recent {
        suggestions.push("Ensure education dates are included".to_string());
    }

    CategoryResult {
        key: CategoryKey::Education,
        points,
        max_points,
        detail: CategoryDetail::Education(EducationDetail {
            entry_count: education.len(),
            has_recent_end_year: has_recent,
            has_gpa,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact quality
// ────────────────────────────────────────────────────────────────────────────

/// Syntactic email check plus a professional-look heuristic: known provider
/// domains pass outright, anything else passes unless it carries a casual
/// token.
pub fn is_professional_email(email: &str) -> bool {
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return false;
    }
    let lowered = email.to_lowercase();
    let domain = lowered.split('@').nth(1).unwrap_or("");
    is_known_email_provider(domain) || !has_casual_email_token(&lowered)
}

/// Digit-count phone check: 10–15 digits after stripping spaces, dashes,
/// parentheses, and plus signs.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '+'))
        .collect();
    !cleaned.is_empty()
        && cleaned.chars().all(|c| c.is_ascii_digit())
        && (10..=15).contains(&cleaned.len())
}

/// Contact bundle on a 5 scale: professional email 2, valid phone 2,
/// recognized professional network link 1.
pub fn score_contact(
    personal: Option<&Personal>,
    max_points: u32,
    _thresholds: &Thresholds,
) -> CategoryResult {
    let Some(personal) = personal else {
        return CategoryResult {
            key: CategoryKey::Contact,
            points: 0,
            max_points,
            detail: CategoryDetail::Contact(ContactDetail {
                has_professional_email: false,
                has_valid_phone: false,
                has_profile_link: false,
            }),
            suggestions: vec!["Add contact information".to_string()],
        };
    };

    let has_email = is_professional_email(&personal.email);
    let has_phone = personal
        .phone
        .as_deref()
        .is_some_and(is_valid_phone);
    let has_link = personal
        .linkedin
        .as_deref()
        .is_some_and(|l| l.contains("linkedin.com"))
        || personal
            .github
            .as_deref()
            .is_some_and(|g| g.contains("github.com"));

    let mut bundle: u64 = 0;
    if has_email {
        bundle += 2;
    }
    if has_phone {
        bundle += 2;
    }
    if has_link {
        bundle += 1;
    }
    let points = fraction_points(bundle, 5, max_points);

    let mut suggestions = Vec::new();
    if !has_email {
        suggestions.push(
            "Use a professional email address (e.g., firstname.lastname@gmail.com)".to_string(),
        );
    }
    if !has_phone {
        suggestions.push("Add a valid phone number in standard format".to_string());
    }
    if !has_link {
        suggestions.push("Add LinkedIn profile or GitHub link".to_string());
    }

    CategoryResult {
        key: CategoryKey::Contact,
        points,
        max_points,
        detail: CategoryDetail::Contact(ContactDetail {
            has_professional_email: has_email,
            has_valid_phone: has_phone,
            has_profile_link: has_link,
        }),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Job relevance
// ────────────────────────────────────────────────────────────────────────────

/// Independent per-sub-section overlap with the job keywords, summed on a 10
/// scale: skills (≥5→4, ≥3→3, ≥1→2), projects (≥3→3, ≥1→2), summary
/// (≥2→3, ≥1→2). No job text scores the neutral midpoint.
pub fn score_relevance(
    resume: &Resume,
    job_desc: Option<&str>,
    max_points: u32,
    thresholds: &Thresholds,
) -> CategoryResult {
    let job_desc = job_desc.unwrap_or("").trim();

    if job_desc.is_empty() {
        return CategoryResult {
            key: CategoryKey::Relevance,
            points: max_points / 2,
            max_points,
            detail: CategoryDetail::Relevance(RelevanceDetail {
                skills_matches: 0,
                projects_matches: 0,
                summary_matches: 0,
                job_provided: false,
            }),
            suggestions: vec!["Add a job description for relevance analysis".to_string()],
        };
    }

    let job_keywords = extract_keywords(job_desc, thresholds.relevance_min_length);

    let skills_text = resume
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let skills_matches = extract_keywords(&skills_text, thresholds.keyword_min_length)
        .intersection(&job_keywords)
        .count();

    let projects_text = resume
        .projects
        .iter()
        .map(|p| format!("{} {}", p.name, p.description.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join(" ");
    let projects_matches = extract_keywords(&projects_text, thresholds.keyword_min_length)
        .intersection(&job_keywords)
        .count();

    let summary_matches = extract_keywords(
        resume.summary.as_deref().unwrap_or(""),
        thresholds.keyword_min_length,
    )
    .intersection(&job_keywords)
    .count();

    let mut bundle: u64 = 0;
    bundle += match skills_matches {
        n if n >= 5 => 4,
        n if n >= 3 => 3,
        n if n >= 1 => 2,
        _ => 0,
    };
    bundle += match projects_matches {
        n if n >= 3 => 3,
        n if n >= 1 => 2,
        _ => 0,
    };
    bundle += match summary_matches {
        n if n >= 2 => 3,
        n if n >= 1 => 2,
        _ => 0,
    };
    let points = fraction_points(bundle, 10, max_points);

    let mut suggestions = Vec::new();
    if skills_matches < 3 {
        suggestions.push("Add more skills from the job description".to_string());
    }
    if projects_matches < 2 {
        suggestions.push("Highlight projects relevant to the job requirements".to_string());
    }
    if summary_matches < 2 {
        suggestions.push("Update summary to include job-relevant keywords".to_string());
    }

    CategoryResult {
        key: CategoryKey::Relevance,
        points,
        max_points,
        detail: CategoryDetail::Relevance(RelevanceDetail {
            skills_matches,
            projects_matches,
            summary_matches,
            job_provided: true,
        }),
        suggestions,
    }
}
