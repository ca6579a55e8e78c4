//! Infrastructure layer - External I/O

pub mod policy_file;

pub use policy_file::{load_policy, parse_policy};
