//! Content-addressed caching of model outputs.
//!
//! Page extraction is expensive (OCR plus an LLM round trip), so results are
//! keyed by a digest of the request content and reused across runs. The key
//! strategy decides which parts of a request are identity-relevant; the cache
//! itself is a plain in-memory map and knows nothing about where values come
//! from.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::normalize::normalize_text;

/// Turns the identity-relevant parts of a request into a canonical byte
/// string for hashing.
pub trait KeyStrategy {
    /// Canonicalize the given parts. Equal outputs mean cache hits.
    fn canonicalize(&self, parts: &[&str]) -> String;
}

/// Key strategy that normalizes each part before joining.
///
/// Two requests differing only in diacritics, case, or edge punctuation map
/// to the same cache entry. Parts are joined with `\x1f` so that
/// `["ab", "c"]` and `["a", "bc"]` stay distinct.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedKey;

impl KeyStrategy for NormalizedKey {
    fn canonicalize(&self, parts: &[&str]) -> String {
        parts
            .iter()
            .map(|part| normalize_text(part))
            .collect::<Vec<_>>()
            .join("\x1f")
    }
}

/// Key strategy that uses parts verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimKey;

impl KeyStrategy for VerbatimKey {
    fn canonicalize(&self, parts: &[&str]) -> String {
        parts.join("\x1f")
    }
}

/// An in-memory cache keyed by the SHA-256 digest of canonicalized request
/// parts. At most one entry exists per key; inserting again overwrites.
pub struct ContentCache<V> {
    strategy: Box<dyn KeyStrategy + Send + Sync>,
    entries: HashMap<String, V>,
}

impl<V> ContentCache<V> {
    /// Create a cache with the given key strategy.
    #[must_use]
    pub fn new(strategy: Box<dyn KeyStrategy + Send + Sync>) -> Self {
        Self {
            strategy,
            entries: HashMap::new(),
        }
    }

    /// The hex digest key for the given request parts.
    #[must_use]
    pub fn key(&self, parts: &[&str]) -> String {
        let canonical = self.strategy.canonicalize(parts);
        format!("{:x}", Sha256::digest(canonical.as_bytes()))
    }

    /// Look up a cached value.
    #[must_use]
    pub fn get(&self, parts: &[&str]) -> Option<&V> {
        self.entries.get(&self.key(parts))
    }

    /// Insert a value, replacing any previous entry for the same key.
    pub fn insert(&mut self, parts: &[&str], value: V) {
        let key = self.key(parts);
        trace!(%key, "cache insert");
        self.entries.insert(key, value);
    }

    /// Return the cached value, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, parts: &[&str], compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let key = self.key(parts);
        self.entries.entry(key).or_insert_with(compute)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ContentCache<V> {
    fn default() -> Self {
        Self::new(Box::new(NormalizedKey))
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for ContentCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
