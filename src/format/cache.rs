//! Memoization of formatted record content.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::response::Record;

use super::format_content;

/// Default number of formatted records kept before the cache is cleared.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
struct Entry {
    content_type: String,
    content: String,
    formatted: String,
}

/// A caller-owned cache of formatted content.
///
/// Re-rendering the same result set (switching tabs, scrolling back to a
/// record) formats each record once. Entries are keyed by a hash of the
/// content type and content; the source text is kept so a hash collision
/// re-formats instead of returning the wrong output. When the cache is full
/// it is cleared before the next insert.
#[derive(Debug, Clone)]
pub struct FormatCache {
    entries: HashMap<u64, Entry>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for FormatCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatCache {
    /// Creates a cache holding up to [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding up to `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the formatted content of `record`, formatting it on a miss.
    pub fn format(&mut self, record: &Record) -> &str {
        self.format_content(record.content(), record.content_type())
    }

    /// Returns `content` formatted for `content_type`, formatting it on a miss.
    pub fn format_content(&mut self, content: &str, content_type: &str) -> &str {
        let key = cache_key(content, content_type);

        let is_hit = self
            .entries
            .get(&key)
            .is_some_and(|e| e.content == content && e.content_type == content_type);

        if is_hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
                self.entries.clear();
            }
            // A colliding entry for different source text is replaced.
            self.entries.remove(&key);
        }

        let entry = self.entries.entry(key).or_insert_with(|| Entry {
            content_type: content_type.to_string(),
            content: content.to_string(),
            formatted: format_content(content, content_type),
        });
        &entry.formatted
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to format.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn cache_key(content: &str, content_type: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content_type.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}
