//! FAQ persistence against PostgreSQL.

use super::FaqStore;
use crate::error::AppError;
use crate::models::{Faq, FaqInput};
use crate::validation::RequestValidator;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const LIST_ACTIVE: &str = r#"
    SELECT id::text AS id, title, content, position, is_active, created_at, updated_at
    FROM faqs
    WHERE is_active = true
    ORDER BY position ASC, created_at ASC
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id::text AS id, title, content, position, is_active, created_at, updated_at
    FROM faqs
    WHERE id = $1::uuid
"#;

const INSERT_FAQ: &str = r#"
    INSERT INTO faqs (title, content, position, is_active)
    VALUES ($1, $2, $3, $4)
    RETURNING id::text AS id, title, content, position, is_active, created_at, updated_at
"#;

const UPDATE_FAQ: &str = r#"
    UPDATE faqs
    SET title = $2, content = $3, position = $4, is_active = $5, updated_at = NOW()
    WHERE id = $1::uuid
    RETURNING id::text AS id, title, content, position, is_active, created_at, updated_at
"#;

const DELETE_FAQ: &str = "DELETE FROM faqs WHERE id = $1::uuid";

/// Store backed by a shared connection pool. Ids travel as their canonical text form.
#[derive(Clone)]
pub struct PgFaqStore {
    pool: PgPool,
}

impl PgFaqStore {
    pub fn new(pool: PgPool) -> Self {
        PgFaqStore { pool }
    }
}

#[async_trait]
impl FaqStore for PgFaqStore {
    async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
        tracing::debug!(sql = %LIST_ACTIVE, "query");
        let rows = sqlx::query(LIST_ACTIVE).fetch_all(&self.pool).await?;
        rows.iter().map(faq_from_row).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        tracing::debug!(sql = %SELECT_BY_ID, id = %id, "query");
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)?;
        faq_from_row(&row)
    }

    async fn create(&self, input: &FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_input(input)?;
        tracing::debug!(sql = %INSERT_FAQ, "query");
        let row = sqlx::query(INSERT_FAQ)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_one(&self.pool)
            .await?;
        faq_from_row(&row)
    }

    async fn update(&self, id: Uuid, input: &FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        RequestValidator::validate_input(input)?;
        tracing::debug!(sql = %UPDATE_FAQ, id = %id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(UPDATE_FAQ)
            .bind(id.to_string())
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.position)
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = row else {
            tx.rollback().await?;
            return Err(AppError::NotFound);
        };
        let faq = faq_from_row(&row)?;
        tx.commit().await?;
        Ok(faq)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        RequestValidator::validate_id(&id)?;
        tracing::debug!(sql = %DELETE_FAQ, id = %id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(DELETE_FAQ)
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::debug!(id = %id, rows_affected = result.rows_affected(), "faq deleted");
        Ok(())
    }
}

fn faq_from_row(row: &PgRow) -> Result<Faq, AppError> {
    let id_raw: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_raw)
        .map_err(|e| AppError::Internal(format!("parse faq id '{}': {}", id_raw, e)))?;
    Ok(Faq {
        id,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        position: row.try_get("position")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
