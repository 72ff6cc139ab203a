//! Common routes: liveness probe.

use crate::handlers::health;
use axum::{routing::any, Router};

/// GET /healthz. Any method is answered, matching what orchestrators may send.
pub fn common_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", any(health))
}
