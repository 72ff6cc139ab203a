use crate::error::AppError;
use crate::response::json_response;
use axum::{http::StatusCode, response::Response};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Liveness only; the database is not consulted.
pub async fn health() -> Response {
    json_response(StatusCode::OK, &HealthBody { status: "ok" })
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
