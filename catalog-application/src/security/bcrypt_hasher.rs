use catalog_domain::credential::PasswordHasher;
use catalog_domain::error::{DomainError, DomainResult as Result};

/// bcrypt 口令哈希器
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// `cost` 取值 4..=31，越大越慢
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Credential {
            reason: e.to_string(),
        })
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}
