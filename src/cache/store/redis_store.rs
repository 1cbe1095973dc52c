use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient, ErrorKind, RedisError, aio::MultiplexedConnection};

use super::{RecordStore, StoreError, ttl_seconds};

/// Redis 记录存储，TTL 通过 `SET EX` 交给 Redis 维护
#[derive(Clone)]
pub struct RedisStore {
    redis: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(client: RedisClient) -> Self {
        Self {
            redis: Arc::new(client),
        }
    }

    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = RedisClient::open(url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self::new(client))
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        self.redis
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to Redis: {}", e);
                StoreError::Unavailable(e.to_string())
            })
    }
}

fn classify(key: &str, e: RedisError) -> StoreError {
    // 值无法转换为字符串时视为记录损坏，其余均为存储故障
    if e.kind() == ErrorKind::TypeError {
        StoreError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        }
    } else {
        tracing::error!("Redis command failed for {}: {}", key, e);
        StoreError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        let result: Option<String> = conn.get(key).await.map_err(|e| classify(key, e))?;
        Ok(result)
    }

    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;

        let result: redis::RedisResult<()> = match ttl {
            Some(ttl) => conn.set_ex(key, value, ttl_seconds(ttl)).await,
            None => conn.set(key, value).await,
        };
        result.map_err(|e| classify(key, e))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: () = conn.del(key).await.map_err(|e| classify(key, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_errors_mark_record_malformed() {
        let e = RedisError::from((ErrorKind::TypeError, "invalid utf-8"));
        assert!(matches!(
            classify("session:abc", e),
            StoreError::Malformed { key, .. } if key == "session:abc"
        ));
    }

    #[test]
    fn io_errors_mark_store_unavailable() {
        let e = RedisError::from((ErrorKind::IoError, "connection reset"));
        assert!(matches!(classify("config", e), StoreError::Unavailable(_)));
    }

    #[test]
    fn other_errors_are_never_treated_as_missing() {
        let e = RedisError::from((ErrorKind::ResponseError, "OOM command not allowed"));
        assert!(matches!(classify("cache:users", e), StoreError::Unavailable(_)));
    }
}
