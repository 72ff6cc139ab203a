//! FaqService: input validation and delegation to a pluggable store.

mod faq;
pub use faq::FaqService;
