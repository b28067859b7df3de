//! TTL cache for generated vocabulary lists.
//!
//! Vocabulary requests are the one route worth caching: the frontend asks
//! for the same list size over and over, and each miss costs a model call.
//! The cache is plain owned state, held by the router and passed explicitly
//! wherever it is needed. Entries expire on read; a sweep is available for
//! housekeeping.

use derive_getters::Getters;
use derive_setters::Setters;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use wordforge_core::VocabList;

const DEFAULT_TTL_SECS: u64 = 600;
const DEFAULT_MAX_SIZE: usize = 16;

/// Cache tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, serde::Serialize, serde::Deserialize)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Entry lifetime in seconds, unless overridden per insert
    default_ttl: u64,
    /// Maximum number of cached lists
    max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// A cached vocabulary list with its expiry bookkeeping.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    /// The cached list
    value: VocabList,
    /// When the entry was stored
    #[getter(skip)]
    inserted_at: Instant,
    /// When the entry was last read
    #[getter(skip)]
    accessed_at: Instant,
    /// Lifetime for this entry
    #[getter(skip)]
    ttl: Duration,
}

impl CacheEntry {
    fn new(value: VocabList, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            inserted_at: now,
            accessed_at: now,
            ttl,
        }
    }

    /// True once the entry has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Vocabulary-list cache keyed by requested word count.
#[derive(Debug)]
pub struct VocabCache {
    config: CacheConfig,
    entries: HashMap<usize, CacheEntry>,
}

impl VocabCache {
    /// Create an empty cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Look up the cached list for a word count.
    ///
    /// An expired entry is dropped on the spot and reported as a miss. A hit
    /// refreshes the entry's recency for eviction purposes.
    pub fn get(&mut self, count: usize) -> Option<&CacheEntry> {
        let expired = match self.entries.get(&count) {
            Some(entry) => entry.is_expired(),
            None => {
                debug!(count, "Cache miss");
                return None;
            }
        };

        if expired {
            debug!(count, "Cache entry expired");
            self.entries.remove(&count);
            return None;
        }

        let entry = self.entries.get_mut(&count)?;
        entry.accessed_at = Instant::now();
        debug!(count, "Cache hit");
        Some(&*entry)
    }

    /// Store a list for a word count.
    ///
    /// `ttl_secs` overrides the configured default lifetime. When the cache
    /// is full and the key is new, the least recently read entry is evicted
    /// first.
    pub fn insert(&mut self, count: usize, value: VocabList, ttl_secs: Option<u64>) {
        let ttl = Duration::from_secs(ttl_secs.unwrap_or(self.config.default_ttl));

        if !self.entries.contains_key(&count) && self.entries.len() >= self.config.max_size {
            self.evict_least_recent();
        }

        debug!(
            count,
            words = value.len(),
            ttl_secs = ttl.as_secs(),
            "Caching vocabulary list"
        );
        self.entries.insert(count, CacheEntry::new(value, ttl));
    }

    /// Drop all expired entries, returning how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of live entries (expired ones count until swept or read).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.accessed_at)
            .map(|(count, _)| *count);

        if let Some(count) = oldest {
            debug!(count, "Evicting least recently read entry");
            self.entries.remove(&count);
        }
    }
}
