use std::time::Instant;

use axum::{
    body::{Body, to_bytes},
    http::{Request, header::CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};

use crate::result::ApiResponse;

/// 错误体最多读取的字节数
const ERROR_BODY_LIMIT: usize = 4096;

/// 记录服务端错误，响应原样返回
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    if !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, ERROR_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(%method, %path, %status, "unreadable error body: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    // 统一响应结构只取错误码和消息，其余按原文记录
    match serde_json::from_slice::<ApiResponse<serde_json::Value>>(&bytes) {
        Ok(envelope) => tracing::error!(
            %method,
            %path,
            %status,
            code = envelope.code,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{}",
            envelope.msg
        ),
        Err(_) => tracing::error!(
            %method,
            %path,
            %status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{}",
            String::from_utf8_lossy(&bytes)
        ),
    }

    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
