//! Database and table bootstrap for the `faqs` store.

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const CREATE_FAQS: &str = r#"
    CREATE TABLE IF NOT EXISTS faqs (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        position INTEGER NOT NULL CHECK (position > 0),
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_FAQS_ACTIVE_POSITION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS faqs_active_position_idx ON faqs (is_active, position)";

/// Create the `faqs` table and its list index if they do not exist yet.
pub async fn ensure_faq_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_FAQS).execute(pool).await?;
    sqlx::query(CREATE_FAQS_ACTIVE_POSITION_INDEX).execute(pool).await?;
    tracing::debug!("faqs table ready");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database when missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Returns the maintenance-database URL (query string kept) and the target database name.
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let (without_query, query) = match url.split_once('?') {
        Some((head, q)) => (head, Some(q)),
        None => (url, None),
    };
    let path_start = without_query
        .rfind('/')
        .ok_or_else(|| AppError::Internal("DATABASE_URL: no path".into()))?
        + 1;
    let db_name = without_query[path_start..].trim().to_string();
    let mut admin_url = format!("{}postgres", &without_query[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
