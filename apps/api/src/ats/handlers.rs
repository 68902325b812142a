//! Axum route handlers for the ATS scoring API.

use axum::extract::Multipart;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::sanitize::{sanitize_resume, sanitize_text, MAX_TEXT_LEN};
use crate::scoring::{score_resume, score_text, ScoreReport, ScoringModel};

/// Upload cap for score-file, before text extraction.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
/// Extracted text shorter than this is treated as a failed extraction.
const MIN_EXTRACTED_CHARS: usize = 100;
/// Extracted text is capped well above the structured-field limits; PDFs
/// legitimately carry more text than any single field.
const MAX_EXTRACTED_CHARS: usize = 5 * MAX_TEXT_LEN;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub resume: Resume,
    #[serde(default)]
    pub job_desc: Option<String>,
    /// Scoring preset name; defaults to `weighted`.
    #[serde(default)]
    pub model: Option<String>,
}

fn resolve_model(name: Option<&str>) -> Result<ScoringModel, AppError> {
    match name {
        None => Ok(ScoringModel::default()),
        Some(name) => ScoringModel::from_name(name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown scoring model '{name}' (expected 'weighted' or 'industry')"
            ))
        }),
    }
}

fn run_score(request: ScoreRequest) -> Result<Json<ScoreReport>, AppError> {
    let model = resolve_model(request.model.as_deref())?;

    let mut resume = request.resume;
    sanitize_resume(&mut resume);

    let job_desc = request
        .job_desc
        .as_deref()
        .map(|j| sanitize_text(j, MAX_TEXT_LEN));

    Ok(Json(score_resume(&model, &resume, job_desc.as_deref())))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores a structured résumé against an optional job description and
/// returns the full report.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Result<Json<ScoreReport>, AppError> {
    run_score(request)
}

/// POST /api/v1/ats/analyze
///
/// Alias of score, kept for clients that call the analysis endpoint.
pub async fn handle_analyze(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    run_score(request)
}

/// POST /api/v1/ats/score-file
///
/// Multipart upload: a `file` part (PDF, ≤5 MB) plus an optional `jobDesc`
/// text part. Extracts plain text and scores it through the raw-text path.
pub async fn handle_score_file(mut multipart: Multipart) -> Result<Json<ScoreReport>, AppError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut file_name = String::new();
    let mut content_type = String::new();
    let mut job_desc: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                file_name = field.file_name().unwrap_or("").to_string();
                content_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                file_bytes = Some(bytes.to_vec());
            }
            "jobDesc" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read jobDesc: {e}")))?;
                let text = sanitize_text(&text, MAX_TEXT_LEN);
                if !text.is_empty() {
                    job_desc = Some(text);
                }
            }
            _ => {}
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge(
            "File size must be less than 5MB".to_string(),
        ));
    }

    let is_pdf = content_type == "application/pdf"
        || file_name.to_lowercase().ends_with(".pdf")
        || bytes.starts_with(b"%PDF");
    if !is_pdf {
        return Err(AppError::UnsupportedMedia(
            "Unsupported file type, please upload a PDF".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        tracing::warn!("PDF extraction failed for '{file_name}': {e}");
        AppError::UnprocessableEntity("Failed to extract text from the PDF".to_string())
    })?;

    let text = sanitize_text(&text, MAX_EXTRACTED_CHARS);
    if text.len() < MIN_EXTRACTED_CHARS {
        return Err(AppError::UnprocessableEntity(
            "Could not extract sufficient text from the file; ensure it contains selectable text"
                .to_string(),
        ));
    }

    Ok(Json(score_text(&text, job_desc.as_deref())))
}
