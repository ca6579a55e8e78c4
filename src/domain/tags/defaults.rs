//! Default tag set
//!
//! Tags in this set are known to the event pipeline and are stored verbatim.
//! Anything else is a custom tag and goes through escaping.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Known tag names, stored as-is when they appear in a policy
pub const DEFAULT_TAGS: [&str; 3] = [
    "observability.filesystem",
    "observability.privilege",
    "observability.process",
];

fn default_tag_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| DEFAULT_TAGS.iter().copied().collect())
}

/// Whether `tag` is an exact match for a default tag
pub fn is_default_tag(tag: &str) -> bool {
    default_tag_set().contains(tag)
}

/// All default tags, sorted
pub fn default_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = default_tag_set().iter().copied().collect();
    tags.sort_unstable();
    tags
}
