// 存储模块
// 包含存储抽象、键生成、数据模型和各类记录操作

pub mod keys;
pub mod models;
pub mod operations;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use models::session::{SessionKind, SessionRecord};
pub use operations::{CacheAside, Credential, SessionError, SessionManager, SiteConfig, UserDirectory};
pub use store::{MemoryStore, RecordStore, RedisStore, SharedStore, StoreError};
