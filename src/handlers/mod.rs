//! HTTP handlers for FAQ CRUD and the liveness probe.

pub mod faq;
pub mod health;
pub use faq::*;
pub use health::*;
