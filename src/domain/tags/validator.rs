//! Tag list validation

use super::defaults::is_default_tag;
use super::escape::escape_tag;
use super::limits::TP_MAX_TAGS;
use crate::error::TagError;
use tracing::debug;

pub struct TagValidator;

impl TagValidator {
    /// Validate and normalize the tags of one tracing policy
    ///
    /// Default tags pass through verbatim; every other tag is replaced by
    /// its escaped form. The output keeps the input's length and order.
    /// The first bad entry fails the whole list, and nothing of the
    /// partially processed list is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tptags::domain::tags::TagValidator;
    ///
    /// let tags = TagValidator::validate(&["observability.process", "a\"b"]).unwrap();
    /// assert_eq!(tags, vec!["observability.process", "a\\\"b"]);
    ///
    /// assert!(TagValidator::validate(&["x"]).is_err());
    /// ```
    pub fn validate<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>, TagError> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }
        if tags.len() > TP_MAX_TAGS {
            debug!(count = tags.len(), max = TP_MAX_TAGS, "too many tags");
            return Err(TagError::TooManyTags { count: tags.len() });
        }

        let validated = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let tag = tag.as_ref();
                if is_default_tag(tag) {
                    return Ok(tag.to_string());
                }
                escape_tag(tag).map_err(|source| {
                    debug!(index, %source, "rejected custom tag");
                    TagError::CustomTag { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = validated.len(), "validated tags");
        Ok(validated)
    }
}
