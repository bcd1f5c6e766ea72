use super::{Entity, EntityId};
use crate::credential::PasswordHasher;
use crate::error::{DomainError, DomainResult as Result};
use serde::{Deserialize, Serialize};

/// 用户
///
/// 只保存口令哈希；哈希字段不参与序列化输出。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: EntityId,
    name: String,
    email: String,
    #[serde(skip_serializing, default)]
    password_hash: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        if email.trim().is_empty() {
            return Err(DomainError::EmailRequired);
        }
        if password.is_empty() {
            return Err(DomainError::PasswordRequired);
        }

        Ok(Self {
            id: EntityId::new(),
            name,
            email,
            password_hash: hasher.hash(password)?,
        })
    }

    /// 校验明文口令
    pub fn validate_password(&self, password: &str, hasher: &dyn PasswordHasher) -> bool {
        hasher.verify(password, &self.password_hash)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl Entity for User {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
