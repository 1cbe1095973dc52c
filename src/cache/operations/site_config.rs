use serde_json::{Value, json};

use crate::cache::keys::SITE_CONFIG_KEY;
use crate::cache::store::{SharedStore, StoreError};

/// 站点配置
///
/// 整份文档存放在一个不过期的键下，每次写入整体覆盖，后写者生效。
#[derive(Clone)]
pub struct SiteConfig {
    store: SharedStore,
}

impl SiteConfig {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 读取配置，不存在或无法解析时返回空对象
    pub async fn read(&self) -> Result<Value, StoreError> {
        let raw = match self.store.get(SITE_CONFIG_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(json!({})),
            Err(StoreError::Malformed { reason, .. }) => {
                tracing::warn!("Unreadable site config, using defaults: {}", reason);
                return Ok(json!({}));
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(document),
            Err(e) => {
                tracing::warn!("Malformed site config, using defaults: {}", e);
                Ok(json!({}))
            }
        }
    }

    pub async fn write(&self, document: &Value) -> Result<(), StoreError> {
        let json = serde_json::to_string(document)?;
        self.store.put(SITE_CONFIG_KEY, &json, None).await?;
        tracing::info!("Site config updated ({} bytes)", json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cache::store::test_support::FlakyStore;
    use crate::cache::store::{MemoryStore, RecordStore};

    #[tokio::test]
    async fn fresh_store_reads_empty_document() {
        let config = SiteConfig::new(Arc::new(MemoryStore::new()));
        assert_eq!(config.read().await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn written_document_reads_back() {
        let config = SiteConfig::new(Arc::new(MemoryStore::new()));
        let document = json!({
            "title": "Route Workers",
            "features": ["auth", "api"],
            "maintenance": false,
            "limits": { "uploads": 10 }
        });

        config.write(&document).await.unwrap();
        assert_eq!(config.read().await.unwrap(), document);
    }

    #[tokio::test]
    async fn write_replaces_whole_document() {
        let config = SiteConfig::new(Arc::new(MemoryStore::new()));
        config.write(&json!({ "a": 1, "b": 2 })).await.unwrap();
        config.write(&json!({ "c": 3 })).await.unwrap();
        assert_eq!(config.read().await.unwrap(), json!({ "c": 3 }));
    }

    #[tokio::test(start_paused = true)]
    async fn config_never_expires() {
        let store = Arc::new(MemoryStore::new());
        let config = SiteConfig::new(store.clone());
        config.write(&json!({ "a": 1 })).await.unwrap();

        tokio::time::advance(std::time::Duration::from_secs(30 * 24 * 3600)).await;
        assert_eq!(config.read().await.unwrap(), json!({ "a": 1 }));
        assert_eq!(store.expires_in(SITE_CONFIG_KEY).await, None);
    }

    #[tokio::test]
    async fn malformed_document_reads_as_default() {
        let store = Arc::new(MemoryStore::new());
        store.put(SITE_CONFIG_KEY, "{not json", None).await.unwrap();
        let config = SiteConfig::new(store);
        assert_eq!(config.read().await.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn read_outage_propagates() {
        let config = SiteConfig::new(Arc::new(FlakyStore {
            fail_get: true,
            ..Default::default()
        }));
        assert!(matches!(config.read().await, Err(StoreError::Unavailable(_))));
    }
}
