use serde::{Deserialize, Serialize};

/// Default recursion ceiling for both directions.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Tunables of a [`crate::Mapper`].
///
/// Deserializable from any serde format, missing keys fall back to their defaults:
///
/// ```
/// let options: docmap::MapperOptions =
///     serde_json::from_str(r#"{ "max_depth": 64 }"#).unwrap();
///
/// assert_eq!(options.max_depth, 64);
/// assert!(options.warn_on_unknown_properties);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Maximum nesting depth before a conversion is aborted as a likely cycle.
    pub max_depth: usize,
    /// Log a warning when a decoded value carries a property the target type doesn't know.
    pub warn_on_unknown_properties: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            warn_on_unknown_properties: true,
        }
    }
}
