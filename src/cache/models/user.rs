use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户目录记录
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// 对外公开的用户信息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PublicUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}
