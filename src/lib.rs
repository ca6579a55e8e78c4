//! tptags - Tracing policy tag validation
//!
//! Validates the free-form tags attached to a tracing policy and normalizes
//! them into a canonical form that is safe to store, compare against the
//! default tag set and print in emitted events.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::tags::{escape_tag, TagValidator};
pub use error::{EscapeError, TagError, TagErrorKind, TptagsError};
