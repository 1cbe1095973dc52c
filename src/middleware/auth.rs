use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{AppState, cache::SessionKind, error::AppError};

/// 已通过校验的管理员会话主体
#[derive(Debug, Clone)]
pub struct AdminSubject(pub String);

/// 从 `Authorization` 头取出令牌，`Bearer ` 前缀可省略
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

pub async fn admin_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .unwrap_or_default()
        .to_string();
    let subject = state.sessions.validate(SessionKind::Admin, &token).await?;

    request.extensions_mut().insert(AdminSubject(subject));
    Ok(next.run(request).await)
}
