#![allow(dead_code)]

//! AI suggestion provider — the single point of entry for generative calls.
//!
//! The provider sits behind `Arc<dyn SuggestionProvider>` in `AppState` so
//! the HTTP surface never depends on a concrete backend. The default
//! implementation speaks the Gemini `generateContent` REST API with retry
//! and exponential backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;
pub mod prompts;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all suggestion calls.
pub const MODEL: &str = "gemini-pro";
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Provider returned empty content")]
    EmptyContent,
}

/// Suggestion task kinds accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestTask {
    Summary,
    Bullet,
    Skills,
    Rewrite,
    Achievement,
}

impl SuggestTask {
    /// Parses a client-supplied task name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "bullet" => Some(Self::Bullet),
            "skills" => Some(Self::Skills),
            "rewrite" => Some(Self::Rewrite),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Bullet => "bullet",
            Self::Skills => "skills",
            Self::Rewrite => "rewrite",
            Self::Achievement => "achievement",
        }
    }
}

/// A validated suggestion request, ready for prompt building.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub task: SuggestTask,
    pub source_text: String,
    pub role: Option<String>,
    pub level: Option<String>,
    pub job_desc: Option<String>,
    pub count: usize,
}

/// Backend seam for suggestion generation. Swap implementations without
/// touching handlers.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<String>, SuggestError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini-backed provider
// ────────────────────────────────────────────────────────────────────────────

/// Default provider speaking the Gemini REST API. Retries on 429 and 5xx
/// with exponential backoff; the API key travels as a query parameter and is
/// never logged.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, SuggestError> {
        let url = format!("{GEMINI_BASE_URL}/{MODEL}:generateContent");
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let mut last_error: Option<SuggestError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Suggestion call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SuggestError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                warn!("Provider returned {status}, will retry");
                last_error = Some(SuggestError::Api {
                    status: status.as_u16(),
                    message: "transient provider error".to_string(),
                });
                continue;
            }

            if !status.is_success() {
                // Body may echo the request URL; keep the key out of errors.
                return Err(SuggestError::Api {
                    status: status.as_u16(),
                    message: "provider rejected the request".to_string(),
                });
            }

            let parsed: GeminiResponse = response.json().await?;
            let text = parsed.text().ok_or(SuggestError::EmptyContent)?;

            debug!("Suggestion call succeeded ({} chars)", text.len());
            return Ok(text.to_string());
        }

        Err(last_error.unwrap_or(SuggestError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<Vec<String>, SuggestError> {
        let prompt = prompts::build_prompt(request);
        let text = self.call(&prompt).await?;
        Ok(clean_suggestion_lines(&text, request.count))
    }
}

/// Splits provider output into suggestion lines: trims, drops markdown
/// headers, strips leading list markers, caps at `count`. Falls back to the
/// whole response when no line survives.
fn clean_suggestion_lines(text: &str, count: usize) -> Vec<String> {
    let cleaned: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.trim_start_matches(|c: char| {
                c.is_ascii_digit() || matches!(c, '-' | '*' | '•' | '.' | ')' | ' ')
            })
            .trim()
            .to_string()
        })
        .filter(|line| !line.is_empty())
        .take(count.max(1))
        .collect();

    if cleaned.is_empty() {
        let fallback = text.trim();
        if fallback.is_empty() {
            vec![]
        } else {
            vec![fallback.to_string()]
        }
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lines_strips_list_markers() {
        let text = "- Led the migration\n* Shipped the tool\n1. Reduced costs";
        let lines = clean_suggestion_lines(text, 5);
        assert_eq!(
            lines,
            vec!["Led the migration", "Shipped the tool", "Reduced costs"]
        );
    }

    #[test]
    fn test_clean_lines_drops_headers_and_blanks() {
        let text = "# Suggestions\n\nImproved latency by 40%\n";
        let lines = clean_suggestion_lines(text, 5);
        assert_eq!(lines, vec!["Improved latency by 40%"]);
    }

    #[test]
    fn test_clean_lines_caps_at_count() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(clean_suggestion_lines(text, 2).len(), 2);
    }

    #[test]
    fn test_clean_lines_falls_back_to_whole_text() {
        let text = "   ###   ";
        // Nothing survives filtering; the trimmed original comes back.
        let lines = clean_suggestion_lines(text, 3);
        assert_eq!(lines, vec!["###"]);
    }

    #[test]
    fn test_clean_lines_empty_input() {
        assert!(clean_suggestion_lines("", 3).is_empty());
    }

    #[test]
    fn test_task_deserializes_lowercase() {
        let task: SuggestTask = serde_json::from_str(r#""bullet""#).unwrap();
        assert_eq!(task, SuggestTask::Bullet);
        assert!(serde_json::from_str::<SuggestTask>(r#""unknown""#).is_err());
    }

    #[test]
    fn test_gemini_response_extracts_first_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}]}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text(), Some("hello"));
    }

    #[test]
    fn test_gemini_response_empty_candidates() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), None);
    }
}
