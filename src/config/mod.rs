use std::env;
use std::time::Duration;

use thiserror::Error;

/// 会话 TTL 上限，Redis 以毫秒保存过期时间
pub const MAX_SESSION_TTL_SECS: u64 = (i64::MAX / 1000) as u64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    pub session_cookie_name: String,
    pub session_cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            api_base_uri: String::new(),
            redis_url: None,
            session_ttl_secs: 24 * 3600,
            session_cookie_name: "sid".to_string(),
            session_cookie_secure: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置，未设置的项使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // 兼容 "24h" 这种写法
        let session_ttl_secs = match get("SESSION_TTL") {
            Some(v) => parse("SESSION_TTL", &v, |s| {
                let secs = match s.strip_suffix('h') {
                    Some(hours) => hours.parse::<u64>().ok()?.checked_mul(3600)?,
                    None => s.parse::<u64>().ok()?,
                };
                (secs <= MAX_SESSION_TTL_SECS).then_some(secs)
            })?,
            None => defaults.session_ttl_secs,
        };

        Ok(Config {
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: match get("SERVER_PORT") {
                Some(v) => parse("SERVER_PORT", &v, |s| s.parse().ok())?,
                None => defaults.server_port,
            },
            api_base_uri: get("API_BASE_URI")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_uri),
            redis_url: get("REDIS_URL"),
            session_ttl_secs,
            session_cookie_name: get("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie_name),
            session_cookie_secure: match get("SESSION_COOKIE_SECURE") {
                Some(v) => parse("SESSION_COOKIE_SECURE", &v, |s| s.parse().ok())?,
                None => defaults.session_cookie_secure,
            },
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn parse<T>(
    key: &'static str,
    value: &str,
    f: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    f(value.trim()).ok_or_else(|| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.api_base_uri, "");
        assert!(config.redis_url.is_none());
        assert_eq!(config.session_ttl(), Duration::from_secs(86400));
        assert_eq!(config.session_cookie_name, "sid");
        assert!(!config.session_cookie_secure);
    }

    #[test]
    fn reads_values() {
        let config = load(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("API_BASE_URI", "/api/"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("SESSION_TTL", "2h"),
            ("SESSION_COOKIE_NAME", "connect.sid"),
            ("SESSION_COOKIE_SECURE", "true"),
        ])
        .unwrap();

        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.api_base_uri, "/api");
        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(config.session_ttl_secs, 7200);
        assert_eq!(config.session_cookie_name, "connect.sid");
        assert!(config.session_cookie_secure);
    }

    #[test]
    fn plain_seconds_ttl() {
        let config = load(&[("SESSION_TTL", "90")]).unwrap();
        assert_eq!(config.session_ttl_secs, 90);
    }

    #[test]
    fn invalid_number_is_reported() {
        let err = load(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "SERVER_PORT", .. }
        ));
    }

    #[test]
    fn oversized_ttl_is_rejected() {
        for value in [
            "9223372036854775807",
            "18446744073709551615",
            "5124095576030432h",
            "2562047788016h",
        ] {
            let err = load(&[("SESSION_TTL", value)]).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { key: "SESSION_TTL", .. }
            ));
        }
    }

    #[test]
    fn ttl_at_limit_is_accepted() {
        let limit = MAX_SESSION_TTL_SECS.to_string();
        let config = load(&[("SESSION_TTL", limit.as_str())]).unwrap();
        assert_eq!(config.session_ttl_secs, MAX_SESSION_TTL_SECS);
    }

    #[test]
    fn empty_redis_url_means_memory_store() {
        let config = load(&[("REDIS_URL", "  ")]).unwrap();
        assert!(config.redis_url.is_none());
    }
}
