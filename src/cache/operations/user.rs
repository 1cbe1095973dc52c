use chrono::Utc;

use crate::cache::keys::user_record_key;
use crate::cache::models::user::DirectoryUser;
use crate::cache::operations::session::Credential;
use crate::cache::store::{SharedStore, StoreError};

/// 用户目录
#[derive(Clone)]
pub struct UserDirectory {
    store: SharedStore,
}

impl UserDirectory {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 登记用户，记录不过期
    pub async fn register(&self, email: &str) -> Result<(), StoreError> {
        let user = DirectoryUser {
            email: email.to_string(),
            registered_at: Utc::now(),
        };
        let json = serde_json::to_string(&user)?;
        self.store.put(&user_record_key(email), &json, None).await?;
        tracing::info!("Registered user {}", email);
        Ok(())
    }

    pub async fn exists(&self, email: &str) -> Result<bool, StoreError> {
        if email.is_empty() {
            return Ok(false);
        }
        match self.store.get(&user_record_key(email)).await {
            Ok(found) => Ok(found.is_some()),
            Err(StoreError::Malformed { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// 用户登录的凭证校验
    ///
    /// STUB: 只确认用户已登记，不校验口令。
    pub async fn verify(&self, email: &str, _password: &str) -> Result<Credential, StoreError> {
        if self.exists(email).await? {
            Ok(Credential::Accepted(email.to_string()))
        } else {
            Ok(Credential::Rejected("User not found".to_string()))
        }
    }
}
