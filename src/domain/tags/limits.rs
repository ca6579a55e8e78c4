//! Bounds applied to a tracing policy's tag list
//!
//! Lengths are counted in Unicode scalar values (`char`), never bytes, so
//! truncation always lands on a character boundary.

/// Maximum number of tags a single tracing policy may carry
pub const TP_MAX_TAGS: usize = 16;

/// Minimum length of a custom tag
pub const TP_MIN_TAG_LEN: usize = 2;

/// Custom tags longer than this are truncated, not rejected
pub const TP_MAX_TAG_LEN: usize = 128;
