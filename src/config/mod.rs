use std::env;
use std::fmt;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub store_url: String,
    pub admin_secret: String,
    pub api_secret: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub user_session_ttl_secs: u64,
    pub admin_session_ttl_secs: u64,
    pub users_cache_ttl_secs: u64,
    pub seed_users: Vec<String>,
}

const DEFAULT_USER_SESSION_HOURS: u64 = 24;
const DEFAULT_ADMIN_SESSION_HOURS: u64 = 8;
const DEFAULT_USERS_CACHE_SECS: u64 = 300;

/// 解析形如 `24h` 或 `24` 的小时数
fn parse_hours(value: Option<String>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().trim_end_matches('h').parse::<u64>().ok())
        .unwrap_or(default)
}

/// 小时数换算为秒，溢出时使用默认值
fn hours_to_secs(value: Option<String>, default: u64) -> u64 {
    parse_hours(value, default)
        .checked_mul(3600)
        .unwrap_or(default * 3600)
}

fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

impl Config {
    /// 使用默认值构造配置
    pub fn new(store_url: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Config {
            store_url: store_url.into(),
            admin_secret: admin_secret.into(),
            api_secret: None,
            server_host: "::".to_string(),
            server_port: 3000,
            user_session_ttl_secs: DEFAULT_USER_SESSION_HOURS * 3600,
            admin_session_ttl_secs: DEFAULT_ADMIN_SESSION_HOURS * 3600,
            users_cache_ttl_secs: DEFAULT_USERS_CACHE_SECS,
            seed_users: Vec::new(),
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let mut config = Config::new(env::var("STORE_URL")?, env::var("ADMIN_SECRET")?);

        config.api_secret = env::var("API_SECRET").ok().filter(|s| !s.is_empty());
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        config.server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        config.user_session_ttl_secs =
            hours_to_secs(env::var("USER_SESSION_TTL").ok(), DEFAULT_USER_SESSION_HOURS);
        config.admin_session_ttl_secs =
            hours_to_secs(env::var("ADMIN_SESSION_TTL").ok(), DEFAULT_ADMIN_SESSION_HOURS);
        config.users_cache_ttl_secs = env::var("USERS_CACHE_TTL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_USERS_CACHE_SECS);
        config.seed_users = parse_list(env::var("SEED_USERS").ok());

        Ok(config)
    }

    pub fn user_session_ttl(&self) -> Duration {
        Duration::from_secs(self.user_session_ttl_secs)
    }

    pub fn admin_session_ttl(&self) -> Duration {
        Duration::from_secs(self.admin_session_ttl_secs)
    }

    pub fn users_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.users_cache_ttl_secs)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("store_url", &self.store_url)
            .field("admin_secret", &"<redacted>")
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("user_session_ttl_secs", &self.user_session_ttl_secs)
            .field("admin_session_ttl_secs", &self.admin_session_ttl_secs)
            .field("users_cache_ttl_secs", &self.users_cache_ttl_secs)
            .field("seed_users", &self.seed_users)
            .finish()
    }
}
