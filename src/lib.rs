//! FAQ backend: JSON REST API over a single PostgreSQL-backed entity.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use app::build_router;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_faq_table};
pub use models::{Faq, FaqInput};
pub use service::FaqService;
pub use state::AppState;
pub use store::{FaqStore, MemoryFaqStore, PgFaqStore};
