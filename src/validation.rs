//! Write-time invariants for FAQ entries.

use crate::error::AppError;
use crate::models::FaqInput;
use uuid::Uuid;

pub struct RequestValidator;

impl RequestValidator {
    /// Reject the nil id; every persisted entry has a real one.
    pub fn validate_id(id: &Uuid) -> Result<(), AppError> {
        if id.is_nil() {
            return Err(AppError::Validation("id is required".into()));
        }
        Ok(())
    }

    /// Title and content must be non-blank after trimming, position at least 1.
    pub fn validate_input(input: &FaqInput) -> Result<(), AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if input.content.trim().is_empty() {
            return Err(AppError::Validation("content is required".into()));
        }
        if input.position <= 0 {
            return Err(AppError::Validation("position must be greater than 0".into()));
        }
        Ok(())
    }
}
