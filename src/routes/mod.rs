pub mod admin;
pub mod api;
pub mod auth;
pub mod extract;

use crate::error::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
