use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::cache::{SessionError, StoreError};
use crate::result::ApiResponse;
use crate::utils::error_codes;

#[derive(Debug)]
pub enum AppError {
    /// 登录凭证被拒绝
    AuthenticationFailed(String),
    /// 缺少或无效的会话
    Unauthorized(String),
    /// 请求体无法解析
    Validation(String),
    NotFound(String),
    StoreUnavailable(String),
    InternalServerError(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(detail) => AppError::StoreUnavailable(detail),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Rejected(reason) => AppError::AuthenticationFailed(reason),
            SessionError::Unauthenticated(reason) => AppError::Unauthorized(reason.to_string()),
            SessionError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_message) = match self {
            AppError::AuthenticationFailed(reason) => {
                (StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED, reason)
            }
            AppError::Unauthorized(reason) => {
                (StatusCode::UNAUTHORIZED, error_codes::UNAUTHENTICATED, reason)
            }
            AppError::Validation(reason) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, reason)
            }
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, what),
            AppError::StoreUnavailable(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::STORE_UNAVAILABLE,
                format!("Record store unavailable: {}", detail),
            ),
            AppError::InternalServerError(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                detail,
            ),
        };

        (status, ApiResponse::failure(code, error_message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_map_to_statuses() {
        let rejected: AppError = SessionError::Rejected("Invalid credentials".into()).into();
        assert_eq!(rejected.into_response().status(), StatusCode::UNAUTHORIZED);

        let missing: AppError = SessionError::Unauthenticated("No session").into();
        assert_eq!(missing.into_response().status(), StatusCode::UNAUTHORIZED);

        let outage: AppError =
            SessionError::Store(StoreError::Unavailable("timeout".into())).into();
        assert!(matches!(outage, AppError::StoreUnavailable(_)));
        assert_eq!(
            outage.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
