//! Application layer - Use cases and orchestration

pub mod check_policy;
pub mod validate_tags;

pub use check_policy::{CheckPolicyService, CheckedPolicy};
pub use validate_tags::ValidateTagsService;
