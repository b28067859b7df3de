//! Tests for the VocabCache implementation.

use std::time::Duration;
use wordforge_cache::{CacheConfig, VocabCache};
use wordforge_core::VocabList;

fn list(words: &[&str]) -> VocabList {
    VocabList::new(words.iter().map(|w| w.to_string()).collect()).expect("non-empty list")
}

#[test]
fn test_cache_insert_and_get() {
    let config = CacheConfig::default().with_default_ttl(10).with_max_size(100);
    let mut cache = VocabCache::new(config);

    cache.insert(10, list(&["abate", "acrimony"]), Some(10));

    let entry = cache.get(10);
    assert!(entry.is_some());
    assert_eq!(entry.unwrap().value().words(), ["abate", "acrimony"]);

    // A count never inserted should return None
    assert!(cache.get(25).is_none());
}

#[test]
fn test_cache_expiration() {
    let config = CacheConfig::default().with_default_ttl(1); // 1 second TTL
    let mut cache = VocabCache::new(config);

    cache.insert(10, list(&["abate"]), Some(1));
    assert!(cache.get(10).is_some());

    // Wait for expiration
    std::thread::sleep(Duration::from_secs(2));

    // Should be expired now
    assert!(cache.get(10).is_none());
}

#[test]
fn test_cache_clear() {
    let config = CacheConfig::default();
    let mut cache = VocabCache::new(config);

    cache.insert(5, list(&["abate"]), None);
    cache.insert(10, list(&["acrimony"]), None);

    assert_eq!(cache.len(), 2);

    cache.clear();

    assert_eq!(cache.len(), 0);
    assert!(cache.get(5).is_none());
    assert!(cache.get(10).is_none());
}

#[test]
fn test_cache_len() {
    let config = CacheConfig::default();
    let mut cache = VocabCache::new(config);

    assert_eq!(cache.len(), 0);

    cache.insert(5, list(&["abate"]), None);
    assert_eq!(cache.len(), 1);

    cache.insert(10, list(&["acrimony"]), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_is_empty() {
    let config = CacheConfig::default();
    let mut cache = VocabCache::new(config);

    assert!(cache.is_empty());

    cache.insert(5, list(&["abate"]), None);
    assert!(!cache.is_empty());

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_cache_update_existing_key() {
    let config = CacheConfig::default();
    let mut cache = VocabCache::new(config);

    cache.insert(5, list(&["abate"]), None);
    let entry = cache.get(5);
    assert_eq!(entry.unwrap().value().words(), ["abate"]);

    // Update with new value
    cache.insert(5, list(&["benevolent"]), None);
    let entry = cache.get(5);
    assert_eq!(entry.unwrap().value().words(), ["benevolent"]);
}

#[test]
fn test_cache_cleanup_expired_entries() {
    let config = CacheConfig::default().with_default_ttl(1);
    let mut cache = VocabCache::new(config);

    cache.insert(5, list(&["abate"]), Some(1));
    cache.insert(10, list(&["acrimony"]), Some(1));

    assert_eq!(cache.len(), 2);

    // Wait for expiration
    std::thread::sleep(Duration::from_secs(2));

    // Cleanup expired entries
    let removed = cache.cleanup_expired();
    assert_eq!(removed, 2);
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_cache_lru_eviction() {
    let config = CacheConfig::default().with_max_size(2);
    let mut cache = VocabCache::new(config);

    cache.insert(5, list(&["abate"]), None);
    std::thread::sleep(Duration::from_millis(10));
    cache.insert(10, list(&["acrimony"]), None);
    std::thread::sleep(Duration::from_millis(10));

    assert_eq!(cache.len(), 2);

    // Reading count=5 makes count=10 the least recently read entry
    assert!(cache.get(5).is_some());
    std::thread::sleep(Duration::from_millis(10));

    // This should evict count=10
    cache.insert(15, list(&["benevolent"]), None);

    assert_eq!(cache.len(), 2);
    assert!(cache.get(10).is_none());
    assert!(cache.get(5).is_some());
    assert!(cache.get(15).is_some());
}
