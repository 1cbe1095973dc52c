/// 存储数据模型
/// 定义写入记录存储的结构体

pub mod session;
pub mod user;

pub use session::{SessionKind, SessionRecord};
pub use user::{DirectoryUser, PublicUser};
