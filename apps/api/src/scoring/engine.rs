//! Engine entry points — run a scoring model over a résumé (or raw text)
//! and assemble the final report.
//!
//! Pure and synchronous: no I/O, no shared mutable state, safe to call
//! concurrently from any number of request handlers.

use crate::models::resume::Resume;
use crate::scoring::categories::{
    score_action_verbs, score_contact, score_education, score_experience,
    score_experience_from_text, score_formatting, score_keywords, score_metrics,
    score_relevance, score_sections,
};
use crate::scoring::model::ScoringModel;
use crate::scoring::profile::ResumeProfile;
use crate::scoring::report::{CategoryKey, CategoryResult, ScoreReport};
use crate::scoring::tips::assemble_tips;

/// Scores a structured résumé against an optional job description using the
/// given model preset.
pub fn score_resume(model: &ScoringModel, resume: &Resume, job_desc: Option<&str>) -> ScoreReport {
    let profile = ResumeProfile::from_resume(resume);
    let thresholds = &model.thresholds;

    let breakdown: Vec<CategoryResult> = model
        .allocations
        .iter()
        .map(|(key, max_points)| match key {
            CategoryKey::Keywords => {
                score_keywords(&profile.full_text, job_desc, *max_points, thresholds)
            }
            CategoryKey::ActionVerbs => {
                score_action_verbs(&profile.verb_text, *max_points, thresholds)
            }
            CategoryKey::Metrics => score_metrics(&profile.metric_text, *max_points, thresholds),
            CategoryKey::Sections => score_sections(&profile.presence, *max_points, thresholds),
            CategoryKey::Experience => {
                score_experience(&resume.experience, *max_points, thresholds)
            }
            CategoryKey::Formatting => {
                score_formatting(&profile.full_text, *max_points, thresholds)
            }
            CategoryKey::Education => score_education(&resume.education, *max_points, thresholds),
            CategoryKey::Contact => {
                score_contact(resume.personal.as_ref(), *max_points, thresholds)
            }
            CategoryKey::Relevance => score_relevance(resume, job_desc, *max_points, thresholds),
        })
        .collect();

    finish(model, breakdown)
}

/// Scores raw extracted text (e.g. from an uploaded PDF). Always uses the
/// weighted preset: the structured-only categories cannot be observed in
/// plain text.
pub fn score_text(text: &str, job_desc: Option<&str>) -> ScoreReport {
    let model = ScoringModel::weighted();
    let profile = ResumeProfile::from_raw_text(text);
    let thresholds = &model.thresholds;

    let breakdown: Vec<CategoryResult> = model
        .allocations
        .iter()
        .map(|(key, max_points)| match key {
            CategoryKey::Keywords => {
                score_keywords(&profile.full_text, job_desc, *max_points, thresholds)
            }
            CategoryKey::ActionVerbs => {
                score_action_verbs(&profile.verb_text, *max_points, thresholds)
            }
            CategoryKey::Metrics => score_metrics(&profile.metric_text, *max_points, thresholds),
            CategoryKey::Sections => score_sections(&profile.presence, *max_points, thresholds),
            CategoryKey::Experience => {
                score_experience_from_text(&profile, *max_points, thresholds)
            }
            CategoryKey::Formatting => {
                score_formatting(&profile.full_text, *max_points, thresholds)
            }
            // Education and contact cannot be observed in extracted plain
            // text; they score their minimum rather than failing.
            CategoryKey::Education => score_education(&[], *max_points, thresholds),
            CategoryKey::Contact => score_contact(None, *max_points, thresholds),
            CategoryKey::Relevance => {
                score_relevance(&Resume::default(), job_desc, *max_points, thresholds)
            }
        })
        .collect();

    finish(&model, breakdown)
}

/// Sums per-category points and clamps defensively; well-formed presets
/// cannot exceed 100, the clamp only guards miswritten custom allocations.
fn finish(model: &ScoringModel, breakdown: Vec<CategoryResult>) -> ScoreReport {
    let total: u32 = breakdown.iter().map(|r| r.points).sum();
    let tips = assemble_tips(&breakdown, &model.thresholds);

    ScoreReport {
        total_score: total.min(100),
        model: model.name.to_string(),
        breakdown,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Achievement, Education, Experience, Personal, Project, Skill,
    };

    fn strong_resume() -> Resume {
        Resume {
            personal: Some(Personal {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane.doe@gmail.com".to_string(),
                phone: Some("+1 (555) 123-4567".to_string()),
                location: Some("Berlin".to_string()),
                website: None,
                linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
                github: Some("https://github.com/janedoe".to_string()),
            }),
            summary: Some(
                "Backend engineer specializing in kubernetes, terraform and reliability"
                    .to_string(),
            ),
            experience: vec![
                Experience {
                    id: "e1".to_string(),
                    company: "Acme".to_string(),
                    position: "Senior Engineer".to_string(),
                    location: None,
                    start_date: Some("2021-03".to_string()),
                    end_date: None,
                    current: true,
                    description: Some(
                        "• Led migration to kubernetes, reduced costs by 30%\n\
                         • Developed deployment tooling adopted by 12 teams\n\
                         • Managed rollout across 4 years of legacy services"
                            .to_string(),
                    ),
                },
                Experience {
                    id: "e2".to_string(),
                    company: "Beta".to_string(),
                    position: "Engineer".to_string(),
                    location: None,
                    start_date: Some("2018-01".to_string()),
                    end_date: Some("2021-02".to_string()),
                    current: false,
                    description: Some(
                        "• Built terraform modules, improved provisioning 3x\n\
                         • Automated incident response, saved $40,000 annually"
                            .to_string(),
                    ),
                },
                Experience {
                    id: "e3".to_string(),
                    company: "Gamma".to_string(),
                    position: "Junior Engineer".to_string(),
                    location: None,
                    start_date: Some("2016-06".to_string()),
                    end_date: Some("2017-12".to_string()),
                    current: false,
                    description: Some("• Delivered internal dashboards for 200 users".to_string()),
                },
            ],
            education: vec![Education {
                id: "edu1".to_string(),
                institution: "State University".to_string(),
                degree: "BSc Computer Science".to_string(),
                field: Some("Distributed Systems".to_string()),
                location: None,
                start_date: Some("2012-09".to_string()),
                end_date: Some("2021-06".to_string()),
                gpa: Some("3.8".to_string()),
            }],
            skills: vec![
                Skill {
                    id: "s1".to_string(),
                    name: "Kubernetes".to_string(),
                    category: None,
                },
                Skill {
                    id: "s2".to_string(),
                    name: "Terraform".to_string(),
                    category: None,
                },
                Skill {
                    id: "s3".to_string(),
                    name: "Rust".to_string(),
                    category: None,
                },
            ],
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Cluster autoscaler".to_string(),
                description: Some("Optimized kubernetes scheduling, cut waste 25%".to_string()),
                technologies: vec!["Rust".to_string()],
                url: None,
                github: None,
            }],
            achievements: vec![Achievement {
                id: "a1".to_string(),
                title: "Infrastructure award".to_string(),
                description: Some("Recognized for improving uptime to 99.99%".to_string()),
                date: Some("2023".to_string()),
            }],
            extras: Default::default(),
        }
    }

    fn empty_resume() -> Resume {
        serde_json::from_str("{}").unwrap()
    }

    const JOB: &str = "Seeking a senior engineer with kubernetes, terraform and reliability \
                       experience to lead infrastructure work";

    #[test]
    fn test_total_bounded_weighted() {
        for resume in [strong_resume(), empty_resume()] {
            for job in [Some(JOB), None] {
                let report = score_resume(&ScoringModel::weighted(), &resume, job);
                assert!(report.total_score <= 100);
            }
        }
    }

    #[test]
    fn test_total_bounded_industry() {
        for resume in [strong_resume(), empty_resume()] {
            for job in [Some(JOB), None] {
                let report = score_resume(&ScoringModel::industry(), &resume, job);
                assert!(report.total_score <= 100);
            }
        }
    }

    #[test]
    fn test_category_points_bounded_by_max() {
        let report = score_resume(&ScoringModel::industry(), &strong_resume(), Some(JOB));
        for result in &report.breakdown {
            assert!(
                result.points <= result.max_points,
                "{:?}: {} > {}",
                result.key,
                result.points,
                result.max_points
            );
        }
    }

    #[test]
    fn test_breakdown_follows_model_order() {
        let model = ScoringModel::weighted();
        let report = score_resume(&model, &strong_resume(), Some(JOB));
        let keys: Vec<CategoryKey> = report.breakdown.iter().map(|r| r.key).collect();
        let expected: Vec<CategoryKey> = model.allocations.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_idempotent_scoring() {
        let resume = strong_resume();
        let first = score_resume(&ScoringModel::weighted(), &resume, Some(JOB));
        let second = score_resume(&ScoringModel::weighted(), &resume, Some(JOB));
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_strong_resume_scores_high() {
        let report = score_resume(&ScoringModel::weighted(), &strong_resume(), Some(JOB));
        assert!(report.total_score >= 70, "got {}", report.total_score);
    }

    #[test]
    fn test_empty_resume_scores_low_but_valid() {
        let report = score_resume(&ScoringModel::weighted(), &empty_resume(), None);
        assert!(report.total_score < 50);
        assert!(!report.tips.is_empty());
    }

    #[test]
    fn test_zero_experience_boundary() {
        let mut resume = strong_resume();
        resume.experience.clear();
        let report = score_resume(&ScoringModel::weighted(), &resume, Some(JOB));
        let experience = report
            .breakdown
            .iter()
            .find(|r| r.key == CategoryKey::Experience)
            .unwrap();
        assert_eq!(experience.points, 0);
        assert!(report
            .tips
            .iter()
            .any(|t| t.to_lowercase().contains("experience")));
    }

    #[test]
    fn test_no_job_text_gives_neutral_keywords() {
        let report = score_resume(&ScoringModel::weighted(), &strong_resume(), None);
        let keywords = report
            .breakdown
            .iter()
            .find(|r| r.key == CategoryKey::Keywords)
            .unwrap();
        assert_eq!(keywords.points, keywords.max_points / 2);
    }

    #[test]
    fn test_tips_capped() {
        let report = score_resume(&ScoringModel::industry(), &empty_resume(), Some(JOB));
        assert!(report.tips.len() <= ScoringModel::industry().thresholds.max_tips);
        assert!(!report.tips.is_empty());
    }

    #[test]
    fn test_raw_text_bounded_and_neutral_without_job() {
        let text = "EXPERIENCE\n• Led platform work, reduced costs by 30%\nSKILLS\nRust, SQL\nEDUCATION\nState University";
        let report = score_text(text, None);
        assert!(report.total_score <= 100);
        let keywords = report
            .breakdown
            .iter()
            .find(|r| r.key == CategoryKey::Keywords)
            .unwrap();
        assert_eq!(keywords.points, keywords.max_points / 2);
        assert_eq!(report.model, "weighted");
    }

    #[test]
    fn test_raw_text_detects_experience_heading() {
        let text = "EXPERIENCE\nLed and developed and managed things, shipped 3 projects";
        let report = score_text(text, None);
        let experience = report
            .breakdown
            .iter()
            .find(|r| r.key == CategoryKey::Experience)
            .unwrap();
        assert!(experience.points > 0);
    }

    #[test]
    fn test_raw_text_empty_input_still_valid() {
        let report = score_text("", None);
        assert!(report.total_score <= 100);
        assert!(!report.tips.is_empty());
    }
}
