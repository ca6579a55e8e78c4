//! Validate tags use case

use crate::domain::TagValidator;
use crate::error::Result;

/// Service for validating tags passed directly, without a policy file
pub struct ValidateTagsService;

impl ValidateTagsService {
    pub fn execute(tags: &[String]) -> Result<Vec<String>> {
        Ok(TagValidator::validate(tags)?)
    }
}
