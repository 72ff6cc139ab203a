//! Request extractors: strict JSON bodies and FAQ path ids.

mod id;
mod json;
pub use id::{parse_faq_id, FaqId};
pub use json::{decode_strict, StrictJson, MAX_BODY_BYTES};
