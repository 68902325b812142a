//! Axum route handlers for résumé CRUD.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeRow};
use crate::resumes::store;
use crate::sanitize::sanitize_resume;
use crate::state::AppState;

const LIST_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRow>,
}

fn to_document(mut resume: Resume) -> Result<serde_json::Value, AppError> {
    sanitize_resume(&mut resume);
    serde_json::to_value(&resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Json<ResumeRow>, AppError> {
    let document = to_document(resume)?;
    let row = store::insert(&state.db, &document).await?;
    Ok(Json(row))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = store::list(&state.db, LIST_LIMIT).await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::fetch(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(resume): Json<Resume>,
) -> Result<Json<ResumeRow>, AppError> {
    let document = to_document(resume)?;
    let row = store::update(&state.db, id, &document)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = store::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_document_sanitizes_before_storing() {
        let resume: Resume = serde_json::from_str(
            r#"{
                "personal": {
                    "firstName": "  Jane ",
                    "lastName": "Doe",
                    "email": "jane@gmail.com",
                    "linkedin": "not-a-url"
                }
            }"#,
        )
        .unwrap();

        let document = to_document(resume).unwrap();
        assert_eq!(document["personal"]["firstName"], "Jane");
        assert_eq!(document["personal"]["linkedin"], serde_json::Value::Null);
    }
}
