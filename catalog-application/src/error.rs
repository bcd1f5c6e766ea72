use catalog_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("config: {key}: {reason}")]
    Config { key: &'static str, reason: String },

    #[error("infra: {0}")]
    Infra(String),
}

impl AppError {
    /// 将领域层的“不存在”提升为应用层 `NotFound`，其余保持原样
    pub fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { reason } => AppError::NotFound(reason),
            DomainError::InvalidId { reason } => AppError::Validation(reason),
            other => AppError::Domain(other),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
