//! Policy file loading

use crate::domain::TracingPolicy;
use crate::error::{Result, TptagsError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a tracing policy from a TOML file
pub fn load_policy(path: &Path) -> Result<TracingPolicy> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TptagsError::PolicyNotFound(path.to_path_buf())
        } else {
            TptagsError::Io(e)
        }
    })?;

    let policy = parse_policy(&contents)?;
    debug!(
        path = %path.display(),
        policy = policy.display_name(),
        tags = policy.tags.len(),
        "loaded policy"
    );
    Ok(policy)
}

/// Parse a tracing policy from TOML text
pub fn parse_policy(contents: &str) -> Result<TracingPolicy> {
    toml::from_str(contents)
        .map_err(|e| TptagsError::Config(format!("Failed to parse policy: {}", e)))
}
