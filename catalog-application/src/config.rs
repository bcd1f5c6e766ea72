use crate::error::{AppError, AppResult};
use std::time::Duration;

/// 应用配置，从环境变量（及 `.env`）加载
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server
    pub web_server_port: u16,

    // Auth
    pub jwt_secret: String,
    pub jwt_expires_in: Duration,
    pub bcrypt_cost: u32,

    // Broker
    pub broker_exchange: String,
    pub broker_queue: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以任意键值来源构造配置，便于测试
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        Ok(Self {
            web_server_port: parse_or(&lookup, "WEB_SERVER_PORT", 8000)?,
            jwt_secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .ok_or(AppError::Config {
                    key: "JWT_SECRET",
                    reason: "missing".to_string(),
                })?,
            jwt_expires_in: Duration::from_secs(parse_or(&lookup, "JWT_EXPIRES_IN", 300)?),
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            broker_exchange: lookup("BROKER_EXCHANGE").unwrap_or_else(|| "amq.direct".to_string()),
            broker_queue: lookup("BROKER_QUEUE").unwrap_or_else(|| "orders".to_string()),
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| AppError::Config {
            key,
            reason: e.to_string(),
        }),
    }
}
