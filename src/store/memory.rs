//! In-process store used as a substitute backend in tests and local runs without a database.

use super::FaqStore;
use crate::error::AppError;
use crate::models::{Faq, FaqInput};
use crate::validation::RequestValidator;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryFaqStore {
    rows: RwLock<HashMap<Uuid, Faq>>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Faq>>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::Internal("faq store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Faq>>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::Internal("faq store lock poisoned".into()))
    }
}

#[async_trait]
impl FaqStore for MemoryFaqStore {
    async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
        let mut out: Vec<Faq> = self.read()?.values().filter(|f| f.is_active).cloned().collect();
        out.sort_by(|a, b| a.position.cmp(&b.position).then(a.created_at.cmp(&b.created_at)));
        Ok(out)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        self.read()?.get(&id).cloned().ok_or(AppError::NotFound)
    }

    async fn create(&self, input: &FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_input(input)?;
        let now = Utc::now();
        let faq = Faq {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            content: input.content.clone(),
            position: input.position,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        self.write()?.insert(faq.id, faq.clone());
        Ok(faq)
    }

    async fn update(&self, id: Uuid, input: &FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        RequestValidator::validate_input(input)?;
        let mut rows = self.write()?;
        let faq = rows.get_mut(&id).ok_or(AppError::NotFound)?;
        faq.title = input.title.clone();
        faq.content = input.content.clone();
        faq.position = input.position;
        faq.is_active = input.is_active;
        faq.updated_at = Utc::now().max(faq.updated_at);
        Ok(faq.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        RequestValidator::validate_id(&id)?;
        self.write()?.remove(&id);
        Ok(())
    }
}
