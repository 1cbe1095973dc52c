use serde::Serialize;

use crate::cache::models::PublicUser;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub secret_configured: bool,
}

/// 公开的用户列表
pub fn published_users() -> Vec<PublicUser> {
    vec![
        PublicUser {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        PublicUser {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}
