//! FAQ CRUD routes under `/api/v1/faqs`.

use crate::handlers::faq::{
    collection_method_not_allowed, create, delete as delete_handler, item_method_not_allowed, list, read, update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const FAQ_BASE_PATH: &str = "/api/v1/faqs";

pub fn faq_routes(state: AppState) -> Router {
    // An explicit HEAD handler keeps `get` from answering HEAD.
    let collection = get(list)
        .post(create)
        .head(collection_method_not_allowed)
        .fallback(collection_method_not_allowed);
    Router::new()
        .route(FAQ_BASE_PATH, collection.clone())
        .route("/api/v1/faqs/", collection)
        .route(
            "/api/v1/faqs/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .head(item_method_not_allowed)
                .fallback(item_method_not_allowed),
        )
        .with_state(state)
}
