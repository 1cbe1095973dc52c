use std::sync::Arc;

use cache::{CacheAside, SessionManager, SharedStore, SiteConfig, UserDirectory};
use config::Config;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod result;
pub mod router;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionManager,
    pub payloads: CacheAside,
    pub site_config: SiteConfig,
    pub users: UserDirectory,
}

impl AppState {
    /// 所有组件共用同一个存储客户端
    pub fn new(config: Config, store: SharedStore) -> Self {
        let sessions = SessionManager::new(
            store.clone(),
            config.user_session_ttl(),
            config.admin_session_ttl(),
        );

        Self {
            sessions,
            payloads: CacheAside::new(store.clone()),
            site_config: SiteConfig::new(store.clone()),
            users: UserDirectory::new(store),
            config: Arc::new(config),
        }
    }
}
