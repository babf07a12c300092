use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::charset::{Charset, DEFAULT_CHARSET};
use crate::key::lookup_key;
use crate::seed::APACHE_MIME_TYPES;

/// Seeded baseline catalog, built once and cloned into every `Registry::new()`.
static BASELINE: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::empty();
    for &(keys, mime_type) in APACHE_MIME_TYPES {
        registry.set(keys, mime_type);
    }
    registry
});

/// Mutable catalog mapping file extensions (and a few literal filenames such as
/// `README`) to MIME type strings, with a configurable charset for annotating
/// `text/*` lookups.
#[derive(Clone)]
pub struct Registry {
    charset: String,
    catalog: HashMap<String, String>,
}

impl Registry {
    /// Registry seeded with the built-in Apache-derived catalog.
    pub fn new() -> Self {
        BASELINE.clone()
    }

    /// Registry with an empty catalog, for building a fully custom table.
    pub fn empty() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            catalog: HashMap::new(),
        }
    }

    /// Resolves `filename` to a MIME type string.
    ///
    /// The lookup key is the lowercased extension from the last `.` in the
    /// name, or the whole name verbatim when there is no extension. A `text/*`
    /// result is annotated with `; charset=...` when `charset` asks for it and
    /// the stored value does not already carry one. On a catalog miss the
    /// caller's `default_type` is returned instead, annotated under the same
    /// charset rule; with no default the lookup returns `None`.
    pub fn lookup(
        &self,
        filename: &str,
        charset: impl Into<Charset>,
        default_type: Option<&str>,
    ) -> Option<String> {
        let directive = charset.into();
        let annotate = !matches!(directive, Charset::Omit);
        let charset = match &directive {
            Charset::Custom(cs) => cs.as_str(),
            _ => self.charset.as_str(),
        };

        let key = lookup_key(filename);
        if let Some(mime_type) = self.catalog.get(&key) {
            if annotate && mime_type.starts_with("text/") && !mime_type.contains("charset") {
                return Some(format!("{}; charset={}", mime_type, charset));
            }
            return Some(mime_type.clone());
        }

        if let Some(default_type) = default_type {
            if annotate && default_type.starts_with("text/") {
                return Some(format!("{}; charset={}", default_type, charset));
            }
            return Some(default_type.to_string());
        }

        None
    }

    /// Registers `mime_type` under one or more keys.
    ///
    /// A comma-separated `keys` string is split and each token trimmed and
    /// registered individually; the return value reports whether every entry
    /// read back as stored. A single key is inserted verbatim, untrimmed, and
    /// the call returns `true` unconditionally. Existing entries are
    /// overwritten silently. Keys are stored as given: registering `".pdf"`
    /// serves `lookup("file.pdf", ..)`, registering `"pdf"` does not.
    pub fn set(&mut self, keys: &str, mime_type: &str) -> bool {
        if keys.contains(',') {
            let mut stored = true;
            for key in keys.split(',') {
                let key = key.trim();
                self.catalog.insert(key.to_string(), mime_type.to_string());
                if self.catalog.get(key).map(String::as_str) != Some(mime_type) {
                    stored = false;
                }
            }
            return stored;
        }
        self.catalog.insert(keys.to_string(), mime_type.to_string());
        true
    }

    /// Removes `key` from the catalog. Removing an absent key is a no-op.
    /// Returns whether the key is absent afterwards.
    pub fn del(&mut self, key: &str) -> bool {
        self.catalog.remove(key);
        !self.catalog.contains_key(key)
    }

    /// Calls `f` once per catalog entry, then returns the catalog itself.
    /// Iteration order is the map's own and is not specified.
    pub fn for_each<F>(&self, mut f: F) -> &HashMap<String, String>
    where
        F: FnMut(&str, &str),
    {
        for (key, mime_type) in &self.catalog {
            f(key.as_str(), mime_type.as_str());
        }
        &self.catalog
    }

    // Charset and catalog accessors

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.charset = charset.into();
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.catalog.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.catalog.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("charset", &self.charset)
            .field("entries", &self.catalog.len())
            .finish()
    }
}
