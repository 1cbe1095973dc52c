/// 记录存储
/// 对外部键值存储的抽象：按字符串键读写，写入时可附带过期时间
mod memory_store;
mod redis_store;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

/// 使用进程内存储的连接串
pub const MEMORY_STORE_URL: &str = "memory://";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed record at {key}: {reason}")]
    Malformed { key: String, reason: String },
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// 带 TTL 的记录存储
///
/// 过期的键与从未写入的键对调用方不可区分，`get` 都返回 `None`。
/// 存储本身不可用时返回 [`StoreError::Unavailable`]，不会被当作缺失处理。
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入记录。`ttl` 为 `None` 时记录一直保留到被显式删除
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError>;

    /// 删除记录，键不存在时同样成功
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn RecordStore>;

/// 将 TTL 换算为整秒，不足一秒向上取整，最少一秒
pub fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

/// 根据连接串创建存储：`memory://` 使用进程内存储，其余按 Redis 地址处理
pub fn connect(url: &str) -> Result<SharedStore, StoreError> {
    if url.starts_with(MEMORY_STORE_URL) {
        tracing::warn!("Using in-process record store, records will not survive a restart");
        let store: SharedStore = Arc::new(MemoryStore::new());
        return Ok(store);
    }

    let store: SharedStore = Arc::new(RedisStore::open(url)?);
    Ok(store)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// 可按操作注入故障的存储，其余行为委托给 [`MemoryStore`]
    #[derive(Default)]
    pub struct FlakyStore {
        pub inner: MemoryStore,
        pub fail_get: bool,
        pub fail_put: bool,
        pub fail_delete: bool,
    }

    fn outage() -> StoreError {
        StoreError::Unavailable("connection refused".into())
    }

    #[async_trait]
    impl RecordStore for FlakyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_get {
                return Err(outage());
            }
            self.inner.get(key).await
        }

        async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
            if self.fail_put {
                return Err(outage());
            }
            self.inner.put(key, value, ttl).await
        }

        async fn delete(&self, key: &str) -> Result<(), StoreError> {
            if self.fail_delete {
                return Err(outage());
            }
            self.inner.delete(key).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_rounds_up_to_whole_seconds() {
        assert_eq!(ttl_seconds(Duration::from_secs(300)), 300);
        assert_eq!(ttl_seconds(Duration::from_millis(1500)), 2);
        assert_eq!(ttl_seconds(Duration::from_millis(1)), 1);
        assert_eq!(ttl_seconds(Duration::ZERO), 1);
    }

    #[tokio::test]
    async fn memory_url_selects_in_process_store() {
        let store = connect("memory://").unwrap();
        store.put("k", "v", None).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn invalid_redis_url_is_reported() {
        assert!(matches!(
            connect("not a url"),
            Err(StoreError::Unavailable(_))
        ));
    }
}
