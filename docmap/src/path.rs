//! # Field Paths
//!
//! A [`FieldPath`] tracks where a conversion currently is inside a value tree. It is pushed
//! when descending into a property, map entry or sequence element and popped on return.
use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property name or a map key.
    Field(String),
    /// The position of an element inside a sequence.
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether any step of this path goes through a sequence element.
    pub fn is_inside_array(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PathSegment::Index(_)))
    }

    /// Renders the path in the server's field path syntax.
    ///
    /// Segments that are not plain identifiers are wrapped in backticks, with backslashes and
    /// backticks escaped.
    pub fn canonical_string(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => quote_segment(name),
                PathSegment::Index(index) => quote_segment(&index.to_string()),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter
                .into_iter()
                .map(|name| PathSegment::Field(name.into()))
                .collect(),
        }
    }
}

fn is_simple_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn quote_segment(segment: &str) -> String {
    if is_simple_identifier(segment) {
        return segment.to_string();
    }

    let escaped = segment.replace('\\', "\\\\").replace('`', "\\`");
    format!("`{escaped}`")
}
