/// 存储操作
/// 会话、旁路缓存、站点配置与用户目录

pub mod payload;
pub mod session;
pub mod site_config;
pub mod user;

pub use payload::CacheAside;
pub use session::{Credential, IssuedSession, SessionError, SessionManager};
pub use site_config::SiteConfig;
pub use user::UserDirectory;
