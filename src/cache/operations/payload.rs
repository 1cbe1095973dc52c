use std::future::Future;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::cache::keys::payload_key;
use crate::cache::store::{SharedStore, StoreError};

/// 旁路缓存
///
/// 命中时直接返回缓存值；未命中时计算新值、带 TTL 写回并返回。
/// 并发未命中时各自计算并覆盖写入，以最后一次写入为准。
#[derive(Clone)]
pub struct CacheAside {
    store: SharedStore,
}

impl CacheAside {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 读取缓存值，损坏的记录按未命中处理
    async fn lookup(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.store.get(key).await {
            Ok(hit) => Ok(hit),
            Err(StoreError::Malformed { reason, .. }) => {
                tracing::warn!("Discarding unreadable cache entry {}: {}", key, reason);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// 写回缓存，失败只记录日志
    async fn populate(&self, key: &str, value: &str, ttl: Duration) {
        if let Err(e) = self.store.put(key, value, Some(ttl)).await {
            tracing::warn!("Failed to populate cache entry {}: {}", key, e);
        }
    }

    pub async fn fetch_cached<F, Fut>(
        &self,
        name: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<String, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        let key = payload_key(name);
        if let Some(hit) = self.lookup(&key).await? {
            tracing::debug!("Cache hit: {}", key);
            return Ok(hit);
        }

        tracing::debug!("Cache miss: {}", key);
        let value = compute().await;
        self.populate(&key, &value, ttl).await;
        Ok(value)
    }

    /// 以 JSON 形式缓存的 [`fetch_cached`](Self::fetch_cached)，无法解析的缓存值按未命中处理
    pub async fn fetch_cached_json<T, F, Fut>(
        &self,
        name: &str,
        ttl: Duration,
        compute: F,
    ) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let key = payload_key(name);
        if let Some(hit) = self.lookup(&key).await? {
            match serde_json::from_str(&hit) {
                Ok(value) => {
                    tracing::debug!("Cache hit: {}", key);
                    return Ok(value);
                }
                Err(e) => tracing::warn!("Discarding malformed cache entry {}: {}", key, e),
            }
        }

        tracing::debug!("Cache miss: {}", key);
        let value = compute().await;
        let json = serde_json::to_string(&value)?;
        self.populate(&key, &json, ttl).await;
        Ok(value)
    }

    /// 载荷当前是否在缓存中
    pub async fn is_cached(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.lookup(&payload_key(name)).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::cache::store::test_support::FlakyStore;
    use crate::cache::store::{MemoryStore, RecordStore};

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test(start_paused = true)]
    async fn hit_within_ttl_skips_compute() {
        let cache = CacheAside::new(Arc::new(MemoryStore::new()));
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let compute = move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            format!("payload-{n}")
        };

        let first = cache.fetch_cached("users", TTL, compute).await.unwrap();
        tokio::time::advance(Duration::from_secs(120)).await;
        let second = cache.fetch_cached("users", TTL, compute).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_is_recomputed() {
        let cache = CacheAside::new(Arc::new(MemoryStore::new()));
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let compute = move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            format!("payload-{n}")
        };

        let first = cache.fetch_cached("users", TTL, compute).await.unwrap();
        tokio::time::advance(TTL).await;
        let second = cache.fetch_cached("users", TTL, compute).await.unwrap();

        assert_eq!(first, "payload-0");
        assert_eq!(second, "payload-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn malformed_json_entry_is_recomputed() {
        let store = Arc::new(MemoryStore::new());
        let cache = CacheAside::new(store.clone());
        store
            .put(&payload_key("users"), "{broken", Some(TTL))
            .await
            .unwrap();

        let value: Vec<u32> = cache
            .fetch_cached_json("users", TTL, || async { vec![1, 2] })
            .await
            .unwrap();
        assert_eq!(value, vec![1, 2]);
        assert_eq!(
            store.get(&payload_key("users")).await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn read_outage_propagates() {
        let cache = CacheAside::new(Arc::new(FlakyStore {
            fail_get: true,
            ..Default::default()
        }));

        let result = cache
            .fetch_cached("users", TTL, || async { "fresh".to_string() })
            .await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn failed_population_still_returns_value() {
        let cache = CacheAside::new(Arc::new(FlakyStore {
            fail_put: true,
            ..Default::default()
        }));

        let value = cache
            .fetch_cached("users", TTL, || async { "fresh".to_string() })
            .await
            .unwrap();
        assert_eq!(value, "fresh");
        assert!(!cache.is_cached("users").await.unwrap());
    }
}
