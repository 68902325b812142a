//! Prompt templates for the suggestion provider, one per task.

use crate::suggest::{SuggestTask, SuggestionRequest};

const SUMMARY_TEMPLATE: &str = "Write a professional {count}-sentence summary for a resume based on the following information.\n\n{context}\n{source_text}\n\nGenerate a concise professional summary that highlights key skills and experience:";

const BULLET_TEMPLATE: &str = "Convert the following job responsibility into {count} concise STAR-style bullet points. Each bullet should start with an action verb, include specific metrics or numbers where possible, and be achievement-focused.\n\nResponsibility:\n{source_text}\n\n{context}\nGenerate {count} bullet points, one per line, without numbering or bullets:";

const SKILLS_TEMPLATE: &str = "Categorize and suggest skills based on the following information.\n\n{source_text}\n\n{context}\nGenerate {count} relevant skills, one per line, organized by category if applicable:";

const REWRITE_TEMPLATE: &str = "Improve the grammar, tone, and clarity of the following text while maintaining its meaning.\n\n{source_text}\n\n{context}\nRewrite the text to be more professional and clear:";

const ACHIEVEMENT_TEMPLATE: &str = "Rewrite the following accomplishment as {count} achievement statements for a resume. Lead with a strong verb and quantify the outcome where possible.\n\nAccomplishment:\n{source_text}\n\n{context}\nGenerate {count} statements, one per line:";

/// Optional role/level/job-description lines shared by every template.
fn context_block(request: &SuggestionRequest) -> String {
    let mut lines = Vec::new();
    if let Some(role) = request.role.as_deref() {
        lines.push(format!("Job Role: {role}"));
    }
    if let Some(level) = request.level.as_deref() {
        lines.push(format!("Experience Level: {level}"));
    }
    if let Some(job_desc) = request.job_desc.as_deref() {
        lines.push(format!("Job Description Context: {job_desc}"));
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Builds the provider prompt for a suggestion request.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let template = match request.task {
        SuggestTask::Summary => SUMMARY_TEMPLATE,
        SuggestTask::Bullet => BULLET_TEMPLATE,
        SuggestTask::Skills => SKILLS_TEMPLATE,
        SuggestTask::Rewrite => REWRITE_TEMPLATE,
        SuggestTask::Achievement => ACHIEVEMENT_TEMPLATE,
    };

    template
        .replace("{count}", &request.count.to_string())
        .replace("{context}", &context_block(request))
        .replace("{source_text}", &request.source_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(task: SuggestTask) -> SuggestionRequest {
        SuggestionRequest {
            task,
            source_text: "Maintained the billing service".to_string(),
            role: Some("Backend Engineer".to_string()),
            level: None,
            job_desc: None,
            count: 3,
        }
    }

    #[test]
    fn test_bullet_prompt_includes_source_and_count() {
        let prompt = build_prompt(&request(SuggestTask::Bullet));
        assert!(prompt.contains("Maintained the billing service"));
        assert!(prompt.contains("3 concise STAR-style bullet points"));
        assert!(prompt.contains("Job Role: Backend Engineer"));
    }

    #[test]
    fn test_summary_prompt_has_no_placeholders_left() {
        let prompt = build_prompt(&request(SuggestTask::Summary));
        assert!(!prompt.contains("{count}"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{source_text}"));
    }

    #[test]
    fn test_context_block_empty_without_optionals() {
        let mut req = request(SuggestTask::Rewrite);
        req.role = None;
        let prompt = build_prompt(&req);
        assert!(!prompt.contains("Job Role:"));
        assert!(!prompt.contains("Experience Level:"));
    }

    #[test]
    fn test_job_desc_appears_when_set() {
        let mut req = request(SuggestTask::Skills);
        req.job_desc = Some("Rust backend role".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Job Description Context: Rust backend role"));
    }
}
