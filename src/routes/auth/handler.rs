use axum::{
    extract::State,
    http::HeaderMap,
};

use crate::{
    AppState,
    cache::SessionKind,
    error::AppError,
    routes::extract::JsonBody,
    middleware::bearer_token,
    result::{ApiJson, ApiResponse},
};

use super::model::{LoginRequest, LoginResponse, LogoutResponse, MeResponse};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<ApiJson<LoginResponse>, AppError> {
    let users = state.users.clone();
    let LoginRequest { email, password } = req;

    let issued = state
        .sessions
        .login(SessionKind::User, move || async move {
            users.verify(&email, &password).await
        })
        .await?;

    Ok(ApiResponse::ok(LoginResponse {
        session_id: issued.token,
        message: "Login successful".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiJson<LogoutResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(SessionKind::User, token).await;
    }

    ApiResponse::ok(LogoutResponse {
        message: "Logged out".to_string(),
    })
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiJson<MeResponse>, AppError> {
    let token = bearer_token(&headers).unwrap_or_default();
    let user_id = state.sessions.validate(SessionKind::User, token).await?;

    Ok(ApiResponse::ok(MeResponse {
        user_id,
        authenticated: true,
    }))
}
