//! 领域层统一错误定义
//!
//! 聚焦事件分发、实体校验、网关（仓储）与消息代理等最小必要集合，
//! 便于在应用层统一转换为 `AppError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 事件分发 ---
    #[error("handler already registered: event={event}, handler={handler}")]
    AlreadyRegistered { event: String, handler: String },

    // --- 实体校验 ---
    #[error("id is required")]
    IdRequired,
    #[error("invalid id: {reason}")]
    InvalidId { reason: String },
    #[error("name is required")]
    NameRequired,
    #[error("price is required")]
    PriceRequired,
    #[error("invalid price: {price}")]
    InvalidPrice { price: f64 },
    #[error("email is required")]
    EmailRequired,
    #[error("password is required")]
    PasswordRequired,

    // --- 网关/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    // --- 基础设施协作方 ---
    #[error("credential error: {reason}")]
    Credential { reason: String },
    #[error("broker error: {reason}")]
    Broker { reason: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

impl DomainError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        DomainError::NotFound {
            reason: reason.into(),
        }
    }

    pub fn broker(reason: impl Into<String>) -> Self {
        DomainError::Broker {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::InvalidId {
            reason: err.to_string(),
        }
    }
}
