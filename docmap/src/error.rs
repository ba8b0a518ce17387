//! # Mapping Errors
//!
//! Every failure raised while describing, decoding or encoding a type is a [`MappingError`].
//! Callers distinguish cases by message content only. Failures that happen while walking a
//! value carry the dotted path of the offending field.
use crate::path::FieldPath;
use std::fmt::Display;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MappingError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MappingError {
    message: String,
    path: Option<String>,
}

impl MappingError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// A failure raised while converting a wire value into a Rust value.
    pub(crate) fn deserialize(path: &FieldPath, reason: impl Display) -> Self {
        Self::located("Could not deserialize object.", path, reason)
    }

    /// A failure raised while converting a Rust value into a wire value.
    pub(crate) fn serialize(path: &FieldPath, reason: impl Display) -> Self {
        Self::located("Could not serialize object.", path, reason)
    }

    fn located(prefix: &str, path: &FieldPath, reason: impl Display) -> Self {
        if path.is_empty() {
            return Self::new(format!("{prefix} {reason}"));
        }

        let path = path.to_string();

        Self {
            message: format!("{prefix} {reason} (found in field '{path}')"),
            path: Some(path),
        }
    }

    /// The full human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The dotted path of the field that failed, if the failure happened below the root.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
