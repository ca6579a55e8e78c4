//! Error types for tptags

use crate::domain::tags::limits::TP_MAX_TAGS;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single custom tag could not be escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("too short")]
    TooShort,

    #[error("escape failed")]
    EscapeFailed,
}

/// Discriminator for a [`TagError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorKind {
    TooManyTags,
    TooShort,
    EscapeFailed,
}

/// Rejection of a policy's tag list as a whole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("tags field: too many tags ({count} > {max})", max = TP_MAX_TAGS)]
    TooManyTags { count: usize },

    /// `index` is 0-based
    #[error("custom tag n{index}: {source}")]
    CustomTag { index: usize, source: EscapeError },
}

impl TagError {
    pub fn kind(&self) -> TagErrorKind {
        match self {
            TagError::TooManyTags { .. } => TagErrorKind::TooManyTags,
            TagError::CustomTag { source, .. } => match source {
                EscapeError::TooShort => TagErrorKind::TooShort,
                EscapeError::EscapeFailed => TagErrorKind::EscapeFailed,
            },
        }
    }

    /// Position of the offending entry, if the failure is tied to one
    pub fn index(&self) -> Option<usize> {
        match self {
            TagError::TooManyTags { .. } => None,
            TagError::CustomTag { index, .. } => Some(*index),
        }
    }
}

/// Main error type for the tptags application
#[derive(Debug, Error)]
pub enum TptagsError {
    #[error("Invalid tags: {0}")]
    Tags(#[from] TagError),

    #[error("Policy file not found: {0}")]
    PolicyNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TptagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TptagsError::PolicyNotFound(_) => 2,
            TptagsError::Tags(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TptagsError::PolicyNotFound(path) => {
                format!(
                    "Policy file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to 'tptags check'\n\
                    • Policy files are TOML with a top-level 'tags' array",
                    path.display()
                )
            }
            TptagsError::Tags(err) => match err.kind() {
                TagErrorKind::TooManyTags => format!(
                    "{}\n\n\
                    A tracing policy may carry at most {} tags.",
                    self, TP_MAX_TAGS
                ),
                TagErrorKind::TooShort => format!(
                    "{}\n\n\
                    Custom tags need at least {} characters.\n\
                    Default tags are always accepted: see 'tptags defaults'",
                    self,
                    crate::domain::tags::limits::TP_MIN_TAG_LEN
                ),
                TagErrorKind::EscapeFailed => self.to_string(),
            },
            _ => self.to_string(),
        }
    }
}

/// Result type using TptagsError
pub type Result<T> = std::result::Result<T, TptagsError>;
