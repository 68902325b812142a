//! Résumé persistence — JSONB document rows in PostgreSQL.
//!
//! The scoring engine never reads these rows; storage exists so clients can
//! save a résumé and re-score it later.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

pub async fn insert(pool: &PgPool, data: &Value) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "INSERT INTO resumes (id, data, created_at, updated_at) \
         VALUES ($1, $2, now(), now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(data)
    .fetch_one(pool)
    .await
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Most recent résumés first; the list endpoint is a dashboard view, not a
/// full export, so it is capped.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn update(pool: &PgPool, id: Uuid, data: &Value) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "UPDATE resumes SET data = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(data)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was actually deleted.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
