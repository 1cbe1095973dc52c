/// 缓存载荷键前缀
const PAYLOAD_PREFIX: &str = "cache:";

/// 站点配置键，不带前缀，其余键都含有 `:`，因此不会与之冲突
pub const SITE_CONFIG_KEY: &str = "config";

/// 用户列表缓存载荷名
pub const USERS_PAYLOAD: &str = "users";

/// 生成缓存载荷键
pub fn payload_key(name: &str) -> String {
    format!("{}{}", PAYLOAD_PREFIX, name)
}
