mod common;
mod faq;
pub use common::common_routes;
pub use faq::{faq_routes, FAQ_BASE_PATH};
