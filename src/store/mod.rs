//! Storage boundary for FAQ entries: one trait, a PostgreSQL adapter and an in-memory adapter.

mod memory;
mod postgres;

pub use memory::MemoryFaqStore;
pub use postgres::PgFaqStore;

use crate::error::AppError;
use crate::models::{Faq, FaqInput};
use async_trait::async_trait;
use uuid::Uuid;

/// Capability set the service needs from a backend.
///
/// Implementations report a missing row as [`AppError::NotFound`] and never assign
/// ids or timestamps from caller data.
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Active entries ordered by position ascending. Empty when none match.
    async fn list_active(&self) -> Result<Vec<Faq>, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Faq, AppError>;

    /// Insert and return the persisted row with its assigned id and timestamps.
    async fn create(&self, input: &FaqInput) -> Result<Faq, AppError>;

    /// Replace every writable field and refresh `updated_at`.
    async fn update(&self, id: Uuid, input: &FaqInput) -> Result<Faq, AppError>;

    /// Hard delete. Deleting an absent id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
