mod auth;
mod error_handler;

pub use auth::{AdminSubject, admin_auth, bearer_token};
pub use error_handler::log_errors;
