//! Shared application state for all routes.

use crate::service::FaqService;

#[derive(Clone)]
pub struct AppState {
    pub service: FaqService,
}

impl AppState {
    pub fn new(service: FaqService) -> Self {
        AppState { service }
    }
}
