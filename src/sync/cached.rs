//! Cached repository decorator.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{Cache, CacheFactory, CacheStats};
use crate::sync::Repository;

type BoxedCache<R> =
    Box<dyn Cache<<R as Repository>::Key, <R as Repository>::Value> + Send>;

/// Cache instance plus the counters describing it.
struct CacheState<K, V> {
    cache: Box<dyn Cache<K, V> + Send>,
    stats: CacheStats,
}

impl<K, V> CacheState<K, V> {
    fn lookup(&mut self, key: &K) -> Option<V> {
        let value = self.cache.get(key);
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    fn store(&mut self, key: K, value: V) {
        if !self.cache.contains_key(&key) && self.cache.len() >= self.cache.capacity() {
            self.stats.record_eviction();
        }
        self.cache.put(key, value);
    }

    fn invalidate(&mut self, key: &K) -> bool {
        self.cache.remove(key).is_some()
    }
}

// == Cached Repository ==
/// Wraps a [`Repository`] with one cache instance.
///
/// The store call always completes before the cache is touched, and the
/// cache lock is never held across it. The two steps are not atomic:
///
/// - two concurrent writers to the same key may leave the cache holding the
///   value of whichever finished its cache step last;
/// - a `find_by_id` miss that read the store before a concurrent `update`
///   committed can cache its older value after the update cached the newer
///   one. The stale entry stays until it is evicted or written again.
pub struct CachedRepository<R: Repository> {
    /// Label used in logs, e.g. `news`
    namespace: &'static str,
    inner: R,
    state: Mutex<CacheState<R::Key, R::Value>>,
}

impl<R: Repository> CachedRepository<R> {
    // == Constructor ==
    pub fn new(namespace: &'static str, inner: R, cache: BoxedCache<R>) -> Self {
        let stats = CacheStats::new(cache.capacity());
        Self {
            namespace,
            inner,
            state: Mutex::new(CacheState { cache, stats }),
        }
    }

    /// Wraps `inner` with a fresh cache built by `factory`.
    pub fn with_factory(namespace: &'static str, inner: R, factory: &CacheFactory) -> Self {
        Self::new(namespace, inner, factory.create_cache())
    }

    /// The wrapped store. Writes made through it bypass the cache.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns true if `key` is resident, without counting as an access.
    pub async fn is_cached(&self, key: &R::Key) -> bool {
        self.state.lock().await.cache.contains_key(key)
    }

    /// Returns counters with the current entry count.
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        let mut stats = state.stats.clone();
        stats.entries = state.cache.len();
        stats
    }
}

#[async_trait]
impl<R: Repository> Repository for CachedRepository<R> {
    type Key = R::Key;
    type Value = R::Value;
    type NewValue = R::NewValue;
    type Patch = R::Patch;
    type Error = R::Error;

    fn key_of(value: &Self::Value) -> Self::Key {
        R::key_of(value)
    }

    async fn find_by_id(&self, key: &Self::Key) -> Result<Self::Value, Self::Error> {
        let cached = self.state.lock().await.lookup(key);
        if let Some(value) = cached {
            debug!(namespace = self.namespace, ?key, "cache hit");
            return Ok(value);
        }

        debug!(namespace = self.namespace, ?key, "cache miss");
        let value = self.inner.find_by_id(key).await?;
        self.state.lock().await.store(key.clone(), value.clone());
        Ok(value)
    }

    async fn save(&self, new_value: Self::NewValue) -> Result<Self::Value, Self::Error> {
        let value = self.inner.save(new_value).await?;
        let key = R::key_of(&value);

        debug!(namespace = self.namespace, ?key, "caching saved value");
        self.state.lock().await.store(key, value.clone());
        Ok(value)
    }

    async fn update(
        &self,
        key: &Self::Key,
        patch: Self::Patch,
    ) -> Result<Self::Value, Self::Error> {
        let value = self.inner.update(key, patch).await?;

        debug!(namespace = self.namespace, ?key, "caching updated value");
        self.state.lock().await.store(key.clone(), value.clone());
        Ok(value)
    }

    async fn delete_by_id(&self, key: &Self::Key) -> Result<(), Self::Error> {
        self.inner.delete_by_id(key).await?;

        if self.state.lock().await.invalidate(key) {
            debug!(namespace = self.namespace, ?key, "cache entry invalidated");
        }
        Ok(())
    }
}
