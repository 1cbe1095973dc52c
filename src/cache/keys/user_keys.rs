/// 用户目录记录键前缀
const USER_RECORD_PREFIX: &str = "user:";

/// 生成用户目录记录键
pub fn user_record_key(email: &str) -> String {
    format!("{}{}", USER_RECORD_PREFIX, email)
}
