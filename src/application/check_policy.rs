//! Check policy use case

use crate::error::Result;
use crate::infrastructure::load_policy;
use std::path::Path;
use tracing::info;

/// Outcome of checking one policy file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPolicy {
    pub name: Option<String>,
    pub tags: Vec<String>,
}

/// Service for validating the tag field of a policy file
pub struct CheckPolicyService;

impl CheckPolicyService {
    /// Load the policy at `path` and validate its tags
    pub fn execute(path: &Path) -> Result<CheckedPolicy> {
        let policy = load_policy(path)?;
        let tags = policy.validated_tags()?;

        info!(policy = policy.display_name(), tags = tags.len(), "policy tags ok");
        Ok(CheckedPolicy {
            name: policy.name,
            tags,
        })
    }
}
