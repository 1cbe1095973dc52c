use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use subtle::ConstantTimeEq;

use crate::cache::keys::session_key;
use crate::cache::models::session::{SessionKind, SessionRecord};
use crate::cache::store::{SharedStore, StoreError};
use crate::utils::{generate_session_token, redact_token};

/// 管理员会话绑定的主体
pub const ADMIN_SUBJECT: &str = "admin";

pub const NO_SESSION: &str = "No session";
pub const INVALID_SESSION: &str = "Invalid session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("authentication rejected: {0}")]
    Rejected(String),
    #[error("unauthenticated: {0}")]
    Unauthenticated(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 凭证校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// 校验通过，携带要绑定到会话的主体
    Accepted(String),
    Rejected(String),
}

/// 常量时间比较，长度不同时仍做一次等长比较
fn secrets_match(expected: &str, submitted: &str) -> bool {
    let expected = expected.as_bytes();
    let submitted = submitted.as_bytes();

    if expected.len() == submitted.len() {
        expected.ct_eq(submitted).into()
    } else {
        let _ = expected.ct_eq(expected);
        false
    }
}

/// 管理员口令校验，未配置口令时拒绝所有登录
pub fn check_admin_secret(expected: &str, submitted: &str) -> Credential {
    if !expected.is_empty() && secrets_match(expected, submitted) {
        Credential::Accepted(ADMIN_SUBJECT.to_string())
    } else {
        Credential::Rejected("Invalid credentials".to_string())
    }
}

/// 新签发的会话
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub record: SessionRecord,
}

/// 会话管理
///
/// 会话是否有效只看记录是否还在存储中，过期交给存储的 TTL 处理。
/// 读取到的记录若自身的 `expires_at` 已过，也按无效处理。
#[derive(Clone)]
pub struct SessionManager {
    store: SharedStore,
    user_ttl: Duration,
    admin_ttl: Duration,
}

impl SessionManager {
    pub fn new(store: SharedStore, user_ttl: Duration, admin_ttl: Duration) -> Self {
        Self {
            store,
            user_ttl,
            admin_ttl,
        }
    }

    pub fn ttl_for(&self, kind: SessionKind) -> Duration {
        match kind {
            SessionKind::User => self.user_ttl,
            SessionKind::Admin => self.admin_ttl,
        }
    }

    /// 登录
    ///
    /// `check` 负责校验凭证并给出要绑定的主体；被拒绝时不写入任何记录。
    pub async fn login<F, Fut>(
        &self,
        kind: SessionKind,
        check: F,
    ) -> Result<IssuedSession, SessionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Credential, StoreError>>,
    {
        let subject = match check().await? {
            Credential::Accepted(subject) => subject,
            Credential::Rejected(reason) => {
                tracing::info!("Rejected {} login: {}", kind, reason);
                return Err(SessionError::Rejected(reason));
            }
        };

        let token = generate_session_token();
        let ttl = self.ttl_for(kind);
        let record = SessionRecord::issue(&token, subject, ttl);
        let json = serde_json::to_string(&record).map_err(StoreError::from)?;

        self.store
            .put(&session_key(kind, &token), &json, Some(ttl))
            .await?;

        tracing::info!(
            "Issued {} session {}.. for {}, expires at {}",
            kind,
            redact_token(&token),
            record.subject,
            record.expires_at
        );

        Ok(IssuedSession { token, record })
    }

    /// 校验令牌，返回会话绑定的主体
    pub async fn validate(&self, kind: SessionKind, token: &str) -> Result<String, SessionError> {
        if token.is_empty() {
            return Err(SessionError::Unauthenticated(NO_SESSION));
        }

        let key = session_key(kind, token);
        let raw = match self.store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(SessionError::Unauthenticated(INVALID_SESSION)),
            Err(StoreError::Malformed { reason, .. }) => {
                tracing::warn!("Unreadable {} session record: {}", kind, reason);
                return Err(SessionError::Unauthenticated(INVALID_SESSION));
            }
            Err(e) => return Err(e.into()),
        };

        // 记录损坏时拒绝访问
        let record: SessionRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    "Malformed {} session record {}..: {}",
                    kind,
                    redact_token(token),
                    e
                );
                return Err(SessionError::Unauthenticated(INVALID_SESSION));
            }
        };

        if record.token != token || record.is_expired_at(Utc::now()) {
            tracing::debug!(
                "Stale {} session record {}.. still present in store",
                kind,
                redact_token(token)
            );
            return Err(SessionError::Unauthenticated(INVALID_SESSION));
        }

        Ok(record.subject)
    }

    /// 注销，令牌不存在或存储删除失败时同样视为成功
    pub async fn logout(&self, kind: SessionKind, token: &str) {
        if token.is_empty() {
            return;
        }

        match self.store.delete(&session_key(kind, token)).await {
            Ok(()) => tracing::info!("Revoked {} session {}..", kind, redact_token(token)),
            Err(e) => tracing::warn!(
                "Failed to delete {} session {}..: {}",
                kind,
                redact_token(token),
                e
            ),
        }
    }
}
