//! Axum route handlers for the suggestion API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::sanitize::{sanitize_text, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN};
use crate::state::AppState;
use crate::suggest::{SuggestTask, SuggestionRequest};

const VALID_LEVELS: &[&str] = &["junior", "mid", "senior", "entry", "intern"];
const MAX_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestBody {
    pub task: String,
    pub source_text: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub job_desc: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

fn validate(body: SuggestBody) -> Result<SuggestionRequest, AppError> {
    let task = SuggestTask::parse(&body.task).ok_or_else(|| {
        AppError::Validation(
            "Task must be one of: summary, bullet, skills, rewrite, achievement".to_string(),
        )
    })?;

    let source_text = sanitize_text(&body.source_text, MAX_TEXT_LEN);
    if source_text.is_empty() {
        return Err(AppError::Validation("sourceText cannot be empty".to_string()));
    }

    let level = match body.level.as_deref().map(str::to_lowercase) {
        None => None,
        Some(level) if VALID_LEVELS.contains(&level.as_str()) => Some(level),
        Some(level) => {
            return Err(AppError::Validation(format!(
                "Level '{level}' must be one of: {}",
                VALID_LEVELS.join(", ")
            )))
        }
    };

    Ok(SuggestionRequest {
        task,
        source_text,
        role: body
            .role
            .as_deref()
            .map(|r| sanitize_text(r, MAX_SHORT_TEXT_LEN))
            .filter(|r| !r.is_empty()),
        level,
        job_desc: body
            .job_desc
            .as_deref()
            .map(|j| sanitize_text(j, MAX_TEXT_LEN))
            .filter(|j| !j.is_empty()),
        count: body.count.clamp(1, MAX_COUNT),
    })
}

/// POST /api/v1/suggest
///
/// Generates improvement suggestions for the given source text. Guarded by
/// the per-IP rate limiter.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(body): Json<SuggestBody>,
) -> Result<Json<SuggestResponse>, AppError> {
    let request = validate(body)?;

    let suggestions = state
        .suggester
        .suggest(&request)
        .await
        .map_err(|e| AppError::Suggest(e.to_string()))?;

    Ok(Json(SuggestResponse { suggestions }))
}
