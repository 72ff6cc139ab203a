//! FaqService: validation in front of any [`FaqStore`].

use crate::error::AppError;
use crate::models::{Faq, FaqInput};
use crate::validation::RequestValidator;
use crate::store::FaqStore;
use std::sync::Arc;
use uuid::Uuid;

/// Enforces entry invariants regardless of the caller, then delegates to the store.
/// Store errors, including not-found, pass through unchanged.
#[derive(Clone)]
pub struct FaqService {
    store: Arc<dyn FaqStore>,
}

impl FaqService {
    pub fn new(store: Arc<dyn FaqStore>) -> Self {
        FaqService { store }
    }

    pub async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
        self.store.list_active().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        self.store.get_by_id(id).await
    }

    pub async fn create(&self, input: FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_input(&input)?;
        self.store.create(&input).await
    }

    pub async fn update(&self, id: Uuid, input: FaqInput) -> Result<Faq, AppError> {
        RequestValidator::validate_id(&id)?;
        RequestValidator::validate_input(&input)?;
        self.store.update(id, &input).await
    }

    /// Succeeds whether or not the entry existed.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        RequestValidator::validate_id(&id)?;
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryFaqStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls so tests can assert the store is never reached on invalid input.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryFaqStore,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FaqStore for CountingStore {
        async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_active().await
        }
        async fn get_by_id(&self, id: Uuid) -> Result<Faq, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_by_id(id).await
        }
        async fn create(&self, input: &FaqInput) -> Result<Faq, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.create(input).await
        }
        async fn update(&self, id: Uuid, input: &FaqInput) -> Result<Faq, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.update(id, input).await
        }
        async fn delete(&self, id: Uuid) -> Result<(), AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(id).await
        }
    }

    /// Backend that fails every call, standing in for a lost connection.
    struct BrokenStore;

    #[async_trait]
    impl FaqStore for BrokenStore {
        async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn get_by_id(&self, _id: Uuid) -> Result<Faq, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn create(&self, _input: &FaqInput) -> Result<Faq, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn update(&self, _id: Uuid, _input: &FaqInput) -> Result<Faq, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn delete(&self, _id: Uuid) -> Result<(), AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
    }

    fn input(title: &str, content: &str, position: i32, is_active: bool) -> FaqInput {
        FaqInput {
            title: title.into(),
            content: content.into(),
            position,
            is_active,
        }
    }

    fn counting() -> (Arc<CountingStore>, FaqService) {
        let store = Arc::new(CountingStore::default());
        let service = FaqService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn create_returns_input_fields_with_fresh_id() {
        let (_, service) = counting();
        let created = service.create(input("Q1", "A1", 1, true)).await.unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.title, "Q1");
        assert_eq!(created.content, "A1");
        assert_eq!(created.position, 1);
        assert!(created.is_active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_store() {
        let (store, service) = counting();
        let cases = [
            input("", "A", 1, true),
            input("  ", "A", 1, true),
            input("Q", "\n", 1, true),
            input("Q", "A", 0, true),
            input("Q", "A", -5, true),
        ];
        for case in cases {
            assert!(matches!(service.create(case.clone()).await, Err(AppError::Validation(_))));
            assert!(matches!(
                service.update(Uuid::new_v4(), case).await,
                Err(AppError::Validation(_))
            ));
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nil_id_is_rejected_for_id_operations() {
        let (store, service) = counting();
        let valid = input("Q", "A", 1, true);
        assert!(matches!(service.get_by_id(Uuid::nil()).await, Err(AppError::Validation(m)) if m == "id is required"));
        assert!(matches!(service.update(Uuid::nil(), valid).await, Err(AppError::Validation(_))));
        assert!(matches!(service.delete(Uuid::nil()).await, Err(AppError::Validation(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_identity() {
        let (_, service) = counting();
        let created = service.create(input("Q", "A", 1, true)).await.unwrap();
        let updated = service
            .update(created.id, input("Q2", "A2", 7, false))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(
            (updated.title.as_str(), updated.content.as_str(), updated.position, updated.is_active),
            ("Q2", "A2", 7, false)
        );
    }

    #[tokio::test]
    async fn not_found_passes_through() {
        let (_, service) = counting();
        let missing = Uuid::new_v4();
        assert!(matches!(service.get_by_id(missing).await, Err(AppError::NotFound)));
        assert!(matches!(
            service.update(missing, input("Q", "A", 1, true)).await,
            Err(AppError::NotFound)
        ));
        assert!(service.delete(missing).await.is_ok());
    }

    #[tokio::test]
    async fn list_only_returns_active_sorted_by_position() {
        let (_, service) = counting();
        for (pos, active) in [(5, true), (1, false), (3, true), (2, true), (4, false)] {
            service
                .create(input(&format!("Q{}", pos), "A", pos, active))
                .await
                .unwrap();
        }
        let listed = service.list_active().await.unwrap();
        assert!(listed.iter().all(|f| f.is_active));
        let positions: Vec<i32> = listed.iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![2, 3, 5]);
    }

    #[tokio::test]
    async fn storage_errors_propagate_unchanged() {
        let service = FaqService::new(Arc::new(BrokenStore));
        assert!(matches!(service.list_active().await, Err(AppError::Db(_))));
        assert!(matches!(service.get_by_id(Uuid::new_v4()).await, Err(AppError::Db(_))));
        assert!(matches!(service.create(input("Q", "A", 1, true)).await, Err(AppError::Db(_))));
        assert!(matches!(service.delete(Uuid::new_v4()).await, Err(AppError::Db(_))));
    }
}
