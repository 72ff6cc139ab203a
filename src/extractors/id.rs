//! Extract the FAQ id from the `/:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Parsed FAQ id. Empty or slash-containing segments are 404, anything else that is not a UUID is 400.
#[derive(Clone, Copy, Debug)]
pub struct FaqId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for FaqId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| match e {
                PathRejection::MissingPathParams(e) => AppError::Internal(e.to_string()),
                _ => AppError::InvalidId,
            })?;
        parse_faq_id(&raw).map(FaqId)
    }
}

pub fn parse_faq_id(raw: &str) -> Result<Uuid, AppError> {
    if raw.is_empty() || raw.contains('/') {
        return Err(AppError::NotFound);
    }
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId)
}
