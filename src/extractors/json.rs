//! JSON body extractor that rejects unknown fields, trailing data and oversized bodies.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// Upper bound on request bodies (1 MiB).
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Like `axum::Json`, but every failure is an [`AppError::Decode`] rendered as 400.
/// Unknown fields are rejected by `#[serde(deny_unknown_fields)]` on the target type.
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::Decode(format!("read request body: {}", e)))?;
        decode_strict(&bytes).map(StrictJson)
    }
}

/// Decode exactly one JSON value; anything after it other than whitespace is rejected.
pub fn decode_strict<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = T::deserialize(&mut de).map_err(|e| AppError::Decode(e.to_string()))?;
    de.end().map_err(|_| AppError::Decode("invalid json".into()))?;
    Ok(value)
}
