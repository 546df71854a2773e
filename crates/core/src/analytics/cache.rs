//! Report result caching using Moka.
//!
//! Provides an in-memory TTL cache for report results so repeated queries
//! over the same scope skip re-aggregation. The cache is injected into the
//! analytics service; report types carry no cache state.

use moka::sync::Cache;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use ledgerlens_shared::CacheConfig;

/// Cache for one kind of report, keyed by its query parameters.
///
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct ReportCache<K, V> {
    cache: Cache<K, Arc<V>>,
}

impl<K, V> ReportCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Creates a new report cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from application configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_capacity, config.ttl_secs)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// Concurrent misses on one key compute once; the other callers wait for
    /// that value. The flag is `true` when the value came from the cache.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> (Arc<V>, bool) {
        let mut hit = true;
        let value = self.cache.get_with(key, || {
            hit = false;
            Arc::new(compute())
        });
        (value, hit)
    }

    /// Like [`Self::get_or_insert_with`], but stores nothing when `compute`
    /// returns `None`.
    pub fn try_get_or_insert_with(
        &self,
        key: K,
        compute: impl FnOnce() -> Option<V>,
    ) -> Option<(Arc<V>, bool)> {
        let mut hit = true;
        let value = self.cache.optionally_get_with(key, || {
            hit = false;
            compute().map(Arc::new)
        })?;
        Some((value, hit))
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    #[cfg(test)]
    fn get(&self, key: &K) -> Option<Arc<V>> {
        self.cache.get(key)
    }

    #[cfg(test)]
    fn invalidate(&self, key: &K) {
        self.cache.invalidate(key);
    }

    #[cfg(test)]
    fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    #[cfg(test)]
    fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn new_cache<K, V>() -> ReportCache<K, V>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        ReportCache::from_config(&CacheConfig::default())
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let cache: ReportCache<u32, String> = new_cache();

        let (first, cached) = cache.get_or_insert_with(1, || "computed".to_string());
        assert!(!cached, "First call should not be cached");

        let (second, cached) = cache.get_or_insert_with(1, || "recomputed".to_string());
        assert!(cached, "Second call should be cached");
        assert_eq!(first, second);
        assert_eq!(*second, "computed");
    }

    #[test]
    fn test_compute_runs_once_per_key() {
        let cache: ReportCache<&'static str, u32> = new_cache();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42
        };

        let _ = cache.get_or_insert_with("a", compute);
        let _ = cache.get_or_insert_with("a", compute);
        let _ = cache.get_or_insert_with("b", compute);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_concurrent_misses_compute_once() {
        let cache: ReportCache<u32, u32> = new_cache();
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(8);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    barrier.wait();
                    let (value, _) = cache.get_or_insert_with(7, || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        std::thread::sleep(std::time::Duration::from_millis(20));
                        49
                    });
                    assert_eq!(*value, 49);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_try_insert_skips_none() {
        let cache: ReportCache<u32, u32> = new_cache();

        assert!(cache.try_get_or_insert_with(1, || None).is_none());
        assert!(cache.get(&1).is_none());

        let (value, hit) = cache.try_get_or_insert_with(1, || Some(5)).unwrap();
        assert_eq!((*value, hit), (5, false));
        let (_, hit) = cache.try_get_or_insert_with(1, || Some(6)).unwrap();
        assert!(hit);
    }

    #[test]
    fn test_invalidate_all() {
        let cache: ReportCache<u32, u32> = new_cache();
        let _ = cache.get_or_insert_with(1, || 10);

        cache.invalidate_all();
        cache.run_pending_tasks();

        let (value, cached) = cache.get_or_insert_with(1, || 20);
        assert!(!cached, "Should be cache miss after invalidate_all");
        assert_eq!(*value, 20);
    }

    #[test]
    fn test_invalidate_specific() {
        let cache: ReportCache<u32, u32> = new_cache();
        let _ = cache.get_or_insert_with(1, || 10);
        let _ = cache.get_or_insert_with(2, || 20);

        cache.invalidate(&1);
        cache.run_pending_tasks();

        assert!(cache.get(&1).is_none());
        assert_eq!(cache.get(&2).as_deref(), Some(&20));
    }

    #[test]
    fn test_from_config_and_entry_count() {
        let cache: ReportCache<u32, u32> = ReportCache::from_config(&CacheConfig {
            enabled: true,
            max_capacity: 10,
            ttl_secs: 60,
        });
        assert_eq!(cache.entry_count(), 0);

        let _ = cache.get_or_insert_with(1, || 10);
        cache.run_pending_tasks();
        assert!(cache.entry_count() >= 1);
    }
}
