//! FAQ entity, write inputs, request bodies and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted FAQ entry. `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faq {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of an entry. Create and update both replace all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqInput {
    pub title: String,
    pub content: String,
    pub position: i32,
    pub is_active: bool,
}

/// Body of POST and PUT.
///
/// Missing or null `title`, `content` and `position` collapse to their zero values so
/// validation reports them. `is_active` absent or null defaults to true.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<FaqRequest> for FaqInput {
    fn from(req: FaqRequest) -> Self {
        FaqInput {
            title: req.title.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
            position: req.position.unwrap_or_default(),
            is_active: req.is_active.unwrap_or(true),
        }
    }
}

/// Short shape used by the list endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct FaqListItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub position: i32,
}

impl From<Faq> for FaqListItem {
    fn from(faq: Faq) -> Self {
        FaqListItem {
            id: faq.id,
            title: faq.title,
            content: faq.content,
            position: faq.position,
        }
    }
}

/// Full shape used by get, create and update.
#[derive(Clone, Debug, Serialize)]
pub struct FaqFull {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub position: i32,
    pub is_active: bool,
}

impl From<Faq> for FaqFull {
    fn from(faq: Faq) -> Self {
        FaqFull {
            id: faq.id,
            title: faq.title,
            content: faq.content,
            position: faq.position,
            is_active: faq.is_active,
        }
    }
}
