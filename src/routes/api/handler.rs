use axum::extract::State;

use crate::{
    AppState,
    cache::{keys::USERS_PAYLOAD, models::PublicUser},
    error::AppError,
    result::{ApiJson, ApiResponse},
};

use super::model::{HealthResponse, published_users};

#[axum::debug_handler]
pub async fn users(
    State(state): State<AppState>,
) -> Result<ApiJson<Vec<PublicUser>>, AppError> {
    let users = state
        .payloads
        .fetch_cached_json(USERS_PAYLOAD, state.config.users_cache_ttl(), || async {
            published_users()
        })
        .await?;

    Ok(ApiResponse::ok(users))
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> ApiJson<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        secret_configured: state.config.api_secret.is_some(),
    })
}
