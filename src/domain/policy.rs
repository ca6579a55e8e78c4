//! Tracing policy document (tag field only)

use super::tags::TagValidator;
use crate::error::TagError;
use serde::Deserialize;

/// The parts of a tracing policy this crate cares about
///
/// Other policy keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TracingPolicy {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl TracingPolicy {
    pub fn new(name: Option<String>, tags: Vec<String>) -> Self {
        Self { name, tags }
    }

    /// Normalized tags of this policy
    pub fn validated_tags(&self) -> Result<Vec<String>, TagError> {
        TagValidator::validate(&self.tags)
    }

    /// Name for display, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
