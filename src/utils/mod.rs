use uuid::Uuid;

/// 生成不透明会话令牌
///
/// UUID v4 提供 122 位随机性，令牌只作为查找键使用，不携带任何可解析的信息。
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// 日志中只输出令牌前缀
pub fn redact_token(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const AUTH_FAILED: i32 = 1002;
    pub const UNAUTHENTICATED: i32 = 1003;
    pub const NOT_FOUND: i32 = 1004;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const STORE_UNAVAILABLE: i32 = 5001;
}
