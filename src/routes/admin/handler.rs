use axum::{
    Extension,
    extract::State,
};
use serde_json::Value;

use crate::{
    AppState,
    cache::{SessionKind, keys::USERS_PAYLOAD, operations::session::check_admin_secret},
    error::AppError,
    routes::extract::JsonBody,
    middleware::AdminSubject,
    result::{ApiJson, ApiResponse},
};

use super::model::{AdminLoginRequest, AdminLoginResponse, ConfigUpdatedResponse, StatsResponse};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AdminLoginRequest>,
) -> Result<ApiJson<AdminLoginResponse>, AppError> {
    let credential = check_admin_secret(&state.config.admin_secret, &req.password);
    let issued = state
        .sessions
        .login(SessionKind::Admin, move || async move { Ok(credential) })
        .await?;

    Ok(ApiResponse::ok(AdminLoginResponse {
        token: issued.token,
        message: "Admin login successful".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<ApiJson<Value>, AppError> {
    let document = state.site_config.read().await?;
    Ok(ApiResponse::ok(document))
}

#[axum::debug_handler]
pub async fn update_config(
    Extension(AdminSubject(subject)): Extension<AdminSubject>,
    State(state): State<AppState>,
    JsonBody(document): JsonBody<Value>,
) -> Result<ApiJson<ConfigUpdatedResponse>, AppError> {
    state.site_config.write(&document).await?;
    tracing::info!("Site config replaced by {}", subject);

    Ok(ApiResponse::ok(ConfigUpdatedResponse {
        message: "Config updated".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn stats(
    State(state): State<AppState>,
) -> Result<ApiJson<StatsResponse>, AppError> {
    let config = state.site_config.read().await?;
    let users_cached = state.payloads.is_cached(USERS_PAYLOAD).await?;

    Ok(ApiResponse::ok(StatsResponse {
        config_keys: config.as_object().map_or(0, |o| o.len()),
        users_cached,
        last_updated: chrono::Utc::now().to_rfc3339(),
    }))
}
