//! FAQ CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{FaqId, StrictJson};
use crate::models::{FaqFull, FaqListItem, FaqRequest};
use crate::response::{message, success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{extract::State, response::Response};

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let items = state.service.list_active().await?;
    Ok(success_many(items.into_iter().map(FaqListItem::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    StrictJson(body): StrictJson<FaqRequest>,
) -> Result<Response, AppError> {
    let created = state.service.create(body.into()).await?;
    tracing::info!(id = %created.id, "faq created");
    Ok(success_one(FaqFull::from(created)))
}

pub async fn read(State(state): State<AppState>, FaqId(id): FaqId) -> Result<Response, AppError> {
    let faq = state.service.get_by_id(id).await?;
    Ok(success_one_ok(FaqFull::from(faq)))
}

pub async fn update(
    State(state): State<AppState>,
    FaqId(id): FaqId,
    StrictJson(body): StrictJson<FaqRequest>,
) -> Result<Response, AppError> {
    let updated = state.service.update(id, body.into()).await?;
    tracing::info!(id = %id, "faq updated");
    Ok(success_one_ok(FaqFull::from(updated)))
}

/// Reports success whether or not the entry existed.
pub async fn delete(State(state): State<AppState>, FaqId(id): FaqId) -> Result<Response, AppError> {
    state.service.delete(id).await?;
    tracing::info!(id = %id, "faq deleted");
    Ok(message("FAQ deleted successfully"))
}

pub async fn collection_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Id is still parsed first so a malformed id reports 400 before the method is checked.
pub async fn item_method_not_allowed(FaqId(_): FaqId) -> AppError {
    AppError::MethodNotAllowed
}
