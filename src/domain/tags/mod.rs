//! Tracing policy tags

pub mod defaults;
pub mod escape;
pub mod limits;
pub mod validator;

// Re-export main types
pub use defaults::{default_tags, is_default_tag, DEFAULT_TAGS};
pub use escape::escape_tag;
pub use limits::{TP_MAX_TAGS, TP_MAX_TAG_LEN, TP_MIN_TAG_LEN};
pub use validator::TagValidator;
