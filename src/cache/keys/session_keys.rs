use crate::cache::models::session::SessionKind;

/// 用户会话键前缀
const USER_SESSION_PREFIX: &str = "session:";

/// 管理员会话键前缀
const ADMIN_SESSION_PREFIX: &str = "admin:";

/// 生成会话键，用户会话与管理员会话分属不同前缀
pub fn session_key(kind: SessionKind, token: &str) -> String {
    let prefix = match kind {
        SessionKind::User => USER_SESSION_PREFIX,
        SessionKind::Admin => ADMIN_SESSION_PREFIX,
    };
    format!("{}{}", prefix, token)
}
