use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON 请求体，解析失败时返回统一的错误结构
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
