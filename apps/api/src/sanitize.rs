//! Input sanitization — trims, caps lengths, strips control characters.
//!
//! The scoring engine assumes length-bounded text; this module enforces that
//! invariant at the service boundary before anything is scored or stored.

use crate::models::resume::Resume;

/// Cap for long free text (descriptions, summaries, job descriptions).
pub const MAX_TEXT_LEN: usize = 10_000;
/// Cap for short fields (names, titles, dates).
pub const MAX_SHORT_TEXT_LEN: usize = 500;
/// Cap for URLs.
pub const MAX_URL_LEN: usize = 2_048;

/// Trims whitespace, truncates to `max_len` characters, and strips control
/// characters other than newline and tab.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    text.trim()
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .take(max_len)
        .collect()
}

/// Validates and caps a URL. Only http(s) URLs within the length cap
/// survive; anything else becomes `None`.
pub fn sanitize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() || url.len() > MAX_URL_LEN {
        return None;
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return None;
    }
    Some(url.chars().filter(|c| !c.is_control()).collect())
}

fn short(text: &str) -> String {
    sanitize_text(text, MAX_SHORT_TEXT_LEN)
}

fn long(text: &str) -> String {
    sanitize_text(text, MAX_TEXT_LEN)
}

fn short_opt(text: &mut Option<String>) {
    if let Some(value) = text.take() {
        let cleaned = short(&value);
        if !cleaned.is_empty() {
            *text = Some(cleaned);
        }
    }
}

fn long_opt(text: &mut Option<String>) {
    if let Some(value) = text.take() {
        let cleaned = long(&value);
        if !cleaned.is_empty() {
            *text = Some(cleaned);
        }
    }
}

fn url_opt(url: &mut Option<String>) {
    *url = url.take().and_then(|value| sanitize_url(&value));
}

fn short_list(items: &mut Vec<String>) {
    *items = items
        .iter()
        .map(|item| short(item))
        .filter(|item| !item.is_empty())
        .collect();
}

/// Applies field-appropriate caps across the whole record, in place.
pub fn sanitize_resume(resume: &mut Resume) {
    if let Some(personal) = resume.personal.as_mut() {
        personal.first_name = short(&personal.first_name);
        personal.last_name = short(&personal.last_name);
        personal.email = short(&personal.email);
        short_opt(&mut personal.phone);
        short_opt(&mut personal.location);
        url_opt(&mut personal.website);
        url_opt(&mut personal.linkedin);
        url_opt(&mut personal.github);
    }

    long_opt(&mut resume.summary);

    for exp in &mut resume.experience {
        exp.id = short(&exp.id);
        exp.company = short(&exp.company);
        exp.position = short(&exp.position);
        short_opt(&mut exp.location);
        short_opt(&mut exp.start_date);
        short_opt(&mut exp.end_date);
        long_opt(&mut exp.description);
    }

    for edu in &mut resume.education {
        edu.id = short(&edu.id);
        edu.institution = short(&edu.institution);
        edu.degree = short(&edu.degree);
        short_opt(&mut edu.field);
        short_opt(&mut edu.location);
        short_opt(&mut edu.start_date);
        short_opt(&mut edu.end_date);
        short_opt(&mut edu.gpa);
    }

    for skill in &mut resume.skills {
        skill.id = short(&skill.id);
        skill.name = short(&skill.name);
        short_opt(&mut skill.category);
    }

    for project in &mut resume.projects {
        project.id = short(&project.id);
        project.name = short(&project.name);
        long_opt(&mut project.description);
        short_list(&mut project.technologies);
        url_opt(&mut project.url);
        url_opt(&mut project.github);
    }

    for achievement in &mut resume.achievements {
        achievement.id = short(&achievement.id);
        achievement.title = short(&achievement.title);
        long_opt(&mut achievement.description);
        short_opt(&mut achievement.date);
    }

    short_list(&mut resume.extras.languages);
    short_list(&mut resume.extras.certifications);
    short_list(&mut resume.extras.interests);
}
