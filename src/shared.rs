use std::sync::{Arc, RwLock};

use crate::charset::Charset;
use crate::registry::Registry;

/// Cheaply clonable handle to a registry shared between threads.
///
/// Every operation goes through the one lock guarding the catalog and its
/// charset, so all clones of a handle observe the same table.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Shared handle around a freshly seeded registry.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Shared handle around an existing registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn lookup(
        &self,
        filename: &str,
        charset: impl Into<Charset>,
        default_type: Option<&str>,
    ) -> Option<String> {
        let registry = self.inner.read().unwrap();
        registry.lookup(filename, charset, default_type)
    }

    pub fn set(&self, keys: &str, mime_type: &str) -> bool {
        let mut registry = self.inner.write().unwrap();
        registry.set(keys, mime_type)
    }

    pub fn del(&self, key: &str) -> bool {
        let mut registry = self.inner.write().unwrap();
        registry.del(key)
    }

    /// Calls `f` once per catalog entry under the read lock. For an owned copy
    /// of the table use [`snapshot`](Self::snapshot).
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, &str),
    {
        let registry = self.inner.read().unwrap();
        registry.for_each(f);
    }

    /// Owned copy of the registry in its current state. Later writes through
    /// any handle do not affect the copy.
    pub fn snapshot(&self) -> Registry {
        let registry = self.inner.read().unwrap();
        registry.clone()
    }

    pub fn charset(&self) -> String {
        let registry = self.inner.read().unwrap();
        registry.charset().to_string()
    }

    pub fn set_charset(&self, charset: impl Into<String>) {
        let mut registry = self.inner.write().unwrap();
        registry.set_charset(charset);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let registry = self.inner.read().unwrap();
        registry.get(key).map(str::to_string)
    }

    pub fn contains(&self, key: &str) -> bool {
        let registry = self.inner.read().unwrap();
        registry.contains(key)
    }

    pub fn len(&self) -> usize {
        let registry = self.inner.read().unwrap();
        registry.len()
    }

    pub fn is_empty(&self) -> bool {
        let registry = self.inner.read().unwrap();
        registry.is_empty()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
