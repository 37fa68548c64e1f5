//! Request-result memoization keyed by collection and query parameters.

use std::any::Any;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lru::LruCache;

/// Backend collections whose reads are memoized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Categories,
    Variants,
    Orders,
    Customers,
    Reviews,
    Analytics,
}

impl Collection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Categories => "categories",
            Collection::Variants => "variants",
            Collection::Orders => "orders",
            Collection::Customers => "customers",
            Collection::Reviews => "reviews",
            Collection::Analytics => "analytics",
        }
    }
}

/// A collection plus the parameters of one read against it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    collection: Collection,
    params: String,
}

impl CacheKey {
    pub fn new(collection: Collection, params: impl Into<String>) -> Self {
        Self {
            collection,
            params: params.into(),
        }
    }

    /// Key for a read that takes no parameters.
    pub fn all(collection: Collection) -> Self {
        Self::new(collection, "")
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }
}

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    stale: bool,
}

/// Shared LRU of decoded backend reads.
///
/// Entries of an invalidated collection stay in place but are marked stale;
/// the next read of a stale key goes to the backend again.
pub struct QueryCache {
    entries: Mutex<LruCache<CacheKey, Entry>>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the fresh value under `key`, if any and of type `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &CacheKey) -> Option<Arc<T>> {
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if entry.stale {
            return None;
        }
        Arc::clone(&entry.value).downcast::<T>().ok()
    }

    /// Stores `value` as the fresh result for `key`.
    pub fn insert<T: Any + Send + Sync>(&self, key: CacheKey, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let erased: Arc<dyn Any + Send + Sync> = value.clone();
        self.lock().put(
            key,
            Entry {
                value: erased,
                stale: false,
            },
        );
        value
    }

    /// Serves `key` from the cache or runs `fetch` and stores its result.
    ///
    /// Errors are returned as-is and never cached. The lock is released while
    /// `fetch` runs, so two concurrent misses both reach the backend and the
    /// last one to finish wins.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(&key) {
            log::debug!("cache hit for {}", key.collection.as_str());
            return Ok(hit);
        }

        let value = fetch().await?;
        Ok(self.insert(key, value))
    }

    /// Marks every entry of `collection` stale. Returns how many were marked.
    pub fn invalidate(&self, collection: Collection) -> usize {
        let mut entries = self.lock();
        let mut marked = 0;
        for (key, entry) in entries.iter_mut() {
            if key.collection == collection && !entry.stale {
                entry.stale = true;
                marked += 1;
            }
        }
        marked
    }

    /// `Some(true)` for a stale entry, `Some(false)` for a fresh one.
    pub fn is_stale(&self, key: &CacheKey) -> Option<bool> {
        self.lock().peek(key).map(|entry| entry.stale)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
