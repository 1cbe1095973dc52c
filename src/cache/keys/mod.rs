/// 存储键模块
/// 每类记录一个键生成函数，不同类别的键互不冲突

pub mod session_keys;
pub mod site_keys;
pub mod user_keys;

pub use session_keys::session_key;
pub use site_keys::{SITE_CONFIG_KEY, USERS_PAYLOAD, payload_key};
pub use user_keys::user_record_key;
