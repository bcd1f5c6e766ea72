//! 用户用例：注册与签发访问令牌
//!
use crate::dto::{CreateUserInput, CreateUserOutput, GetJwtInput, GetJwtOutput};
use crate::error::{AppError, AppResult as Result};
use crate::security::TokenIssuer;
use catalog_domain::credential::PasswordHasher;
use catalog_domain::entity::{Entity, User};
use catalog_domain::error::DomainError;
use catalog_domain::persist::UserGateway;
use std::sync::Arc;
use std::time::Duration;

pub struct UserService {
    gateway: Arc<dyn UserGateway>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    token_ttl: Duration,
}

impl UserService {
    pub fn new(
        gateway: Arc<dyn UserGateway>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            gateway,
            hasher,
            tokens,
            token_ttl,
        }
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<CreateUserOutput> {
        let user = User::new(
            input.name,
            input.email,
            &input.password,
            self.hasher.as_ref(),
        )?;
        self.gateway.create(&user).await?;

        tracing::info!(user_id = %user.id(), "user created");
        Ok(CreateUserOutput::from(&user))
    }

    /// 校验邮箱与口令后签发令牌；邮箱不存在返回 `NotFound`，口令错误返回 `Unauthorized`
    pub async fn issue_token(&self, input: GetJwtInput) -> Result<GetJwtOutput> {
        let user = match self.gateway.find_by_email(&input.email).await {
            Ok(user) => user,
            Err(DomainError::NotFound { reason }) => return Err(AppError::NotFound(reason)),
            Err(other) => return Err(other.into()),
        };

        if !user.validate_password(&input.password, self.hasher.as_ref()) {
            tracing::warn!(user_id = %user.id(), "password mismatch");
            return Err(AppError::Unauthorized("invalid credentials".to_string()));
        }

        let access_token = self.tokens.issue(&user.id().to_string(), self.token_ttl)?;
        Ok(GetJwtOutput { access_token })
    }
}
