//! Shared router state.

use std::sync::Arc;
use tokio::sync::Mutex;
use wordforge_cache::{CacheConfig, VocabCache};
use wordforge_interface::{DictionaryLookup, TextGenerator};

/// Everything the route handlers share.
///
/// The vocabulary cache lives here rather than in any process-global: it is
/// owned state, cloned by handle, and visible in every signature that
/// touches it.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend for generated content.
    pub generator: Arc<dyn TextGenerator>,
    /// Dictionary backend for raw word lookups.
    pub dictionary: Arc<dyn DictionaryLookup>,
    /// TTL cache for generated vocabulary lists.
    pub vocab_cache: Arc<Mutex<VocabCache>>,
}

impl AppState {
    /// Creates router state over the given providers.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        dictionary: Arc<dyn DictionaryLookup>,
        cache_config: CacheConfig,
    ) -> Self {
        Self {
            generator,
            dictionary,
            vocab_cache: Arc::new(Mutex::new(VocabCache::new(cache_config))),
        }
    }
}
