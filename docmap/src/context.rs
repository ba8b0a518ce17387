//! # Conversion Contexts
//!
//! State threaded through one decode or encode call: the current [`FieldPath`], the mapper's
//! options and descriptor cache, and direction specific extras (the originating document on
//! decode, the collected server transforms on encode).
use crate::cache::DescriptorCache;
use crate::error::{MappingError, Result};
use crate::options::MapperOptions;
use crate::path::{FieldPath, PathSegment};
use crate::transform::{FieldTransform, TransformKind};
use crate::value::DocumentReference;
use std::fmt::Display;

fn depth_exceeded(max_depth: usize) -> String {
    format!("Exceeded maximum depth of {max_depth}, which likely indicates there's an object cycle")
}

pub struct DecodeContext<'a> {
    cache: &'a DescriptorCache,
    options: &'a MapperOptions,
    document: Option<&'a DocumentReference>,
    path: FieldPath,
}

impl<'a> DecodeContext<'a> {
    pub(crate) fn new(
        cache: &'a DescriptorCache,
        options: &'a MapperOptions,
        document: Option<&'a DocumentReference>,
    ) -> Self {
        Self {
            cache,
            options,
            document,
            path: FieldPath::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn options(&self) -> &MapperOptions {
        self.options
    }

    /// The document the decoded value was read from, if the caller supplied one.
    pub fn document(&self) -> Option<&'a DocumentReference> {
        self.document
    }

    pub(crate) fn cache(&self) -> &'a DescriptorCache {
        self.cache
    }

    /// Builds an error located at the current path.
    pub fn error(&self, reason: impl Display) -> MappingError {
        MappingError::deserialize(&self.path, reason)
    }

    /// Runs `f` one level deeper, under `segment`.
    pub fn descend<R>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        if self.path.len() >= self.options.max_depth {
            return Err(self.error(depth_exceeded(self.options.max_depth)));
        }

        self.path.push(segment);
        let result = f(self);
        self.path.pop();

        result
    }
}

pub struct EncodeContext<'a> {
    cache: &'a DescriptorCache,
    options: &'a MapperOptions,
    path: FieldPath,
    transforms: Vec<FieldTransform>,
}

impl<'a> EncodeContext<'a> {
    pub(crate) fn new(cache: &'a DescriptorCache, options: &'a MapperOptions) -> Self {
        Self {
            cache,
            options,
            path: FieldPath::new(),
            transforms: Vec::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn options(&self) -> &MapperOptions {
        self.options
    }

    pub(crate) fn cache(&self) -> &'a DescriptorCache {
        self.cache
    }

    pub fn error(&self, reason: impl Display) -> MappingError {
        MappingError::serialize(&self.path, reason)
    }

    pub fn descend<R>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        if self.path.len() >= self.options.max_depth {
            return Err(self.error(depth_exceeded(self.options.max_depth)));
        }

        self.path.push(segment);
        let result = f(self);
        self.path.pop();

        result
    }

    /// Records a request for the server to fill in its own time at the current path.
    pub fn server_timestamp(&mut self) -> Result<()> {
        if self.path.is_inside_array() {
            return Err(self.error("Server timestamps are not supported inside arrays"));
        }

        self.transforms.push(FieldTransform {
            path: self.path.clone(),
            kind: TransformKind::ServerTimestamp,
        });

        Ok(())
    }

    pub(crate) fn into_transforms(self) -> Vec<FieldTransform> {
        self.transforms
    }
}
