use axum::Json;
use serde::{Deserialize, Serialize};

use crate::utils::error_codes;

/// 统一响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_data: Option<T>,
}

/// 处理函数返回的 JSON 响应
pub type ApiJson<T> = Json<ApiResponse<T>>;

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> ApiJson<T> {
        Json(Self {
            code: error_codes::SUCCESS,
            msg: "success".into(),
            resp_data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    /// 错误响应不带数据
    pub fn failure(code: i32, msg: impl Into<String>) -> ApiJson<()> {
        Json(Self {
            code,
            msg: msg.into(),
            resp_data: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_omits_payload() {
        let Json(body) = ApiResponse::failure(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "code": 1004, "msg": "missing" }));
    }
}
