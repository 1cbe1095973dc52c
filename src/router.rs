use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, middleware::{admin_auth, log_errors}, routes};

// 登录会话相关的路由
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/me", get(routes::auth::me))
}

// 管理后台路由，除登录外都需要管理员会话
pub fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/admin/config",
            get(routes::admin::get_config).post(routes::admin::update_config),
        )
        .route("/admin/stats", get(routes::admin::stats))
        .route_layer(middleware::from_fn_with_state(state, admin_auth));

    Router::new()
        .route("/admin/login", post(routes::admin::login))
        .merge(protected)
}

// 数据接口路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(routes::api::users))
        .route("/api/health", get(routes::api::health))
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(admin_routes(state.clone()))
        .merge(api_routes())
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer())
                .layer(middleware::from_fn(log_errors)),
        )
        .with_state(state)
}
