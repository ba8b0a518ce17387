//! # Descriptor Cache
//!
//! Memoizes one [`Mapping`] per [`Document`] type, keyed by [`TypeId`].
//!
//! Entries are built outside the lock. When two threads build the same type at once the first
//! insert wins and the other thread adopts the stored entry, so every caller observes the same
//! descriptor. Entries are immutable once stored, which makes recovering from a poisoned lock
//! safe.
use crate::descriptor::{Mapping, TypeDescriptor};
use crate::error::{MappingError, Result};
use crate::field::Document;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Entry = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Entry>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor of `T`, building and caching it on first use.
    pub fn describe<T: Document>(&self) -> Result<Arc<TypeDescriptor>> {
        self.mapping::<T>()
            .map(|mapping| Arc::clone(mapping.descriptor()))
    }

    pub(crate) fn mapping<T: Document>(&self) -> Result<Arc<Mapping<T>>> {
        let key = TypeId::of::<T>();

        let cached = self.read().get(&key).cloned();
        if let Some(entry) = cached {
            return downcast::<T>(entry);
        }

        let built: Entry = Arc::new(Mapping::<T>::build()?);

        let mut inserted = false;
        let stored = self
            .write()
            .entry(key)
            .or_insert_with(|| {
                inserted = true;
                Arc::clone(&built)
            })
            .clone();

        if inserted {
            tracing::debug!(class = %T::type_name(), "type descriptor cached");
        } else {
            tracing::trace!(class = %T::type_name(), "type descriptor built concurrently, reusing cached entry");
        }

        downcast::<T>(stored)
    }

    /// Number of cached types.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drops every cached descriptor. They are rebuilt on next use.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn downcast<T: Document>(entry: Entry) -> Result<Arc<Mapping<T>>> {
    entry.downcast::<Mapping<T>>().map_err(|_| {
        MappingError::new(format!(
            "Descriptor cache entry for class {} has an unexpected type",
            T::type_name()
        ))
    })
}

impl fmt::Debug for DescriptorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorCache")
            .field("len", &self.len())
            .finish()
    }
}
