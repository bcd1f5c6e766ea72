use async_trait::async_trait;
use catalog_domain::entity::User;
use catalog_domain::error::{DomainError, DomainResult as Result};
use catalog_domain::persist::UserGateway;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// 基于内存的用户网关，以邮箱为键
#[derive(Default)]
pub struct InMemoryUserGateway {
    users: DashMap<String, User>,
}

impl InMemoryUserGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn create(&self, user: &User) -> Result<()> {
        match self.users.entry(user.email().to_string()) {
            Entry::Occupied(_) => Err(DomainError::Conflict {
                reason: format!("email already in use: {}", user.email()),
            }),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(())
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<User> {
        self.users
            .get(email)
            .map(|u| u.value().clone())
            .ok_or_else(|| DomainError::not_found(format!("user {email}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::credential::PasswordHasher;
    use catalog_domain::entity::Entity;

    struct Plain;

    impl PasswordHasher for Plain {
        fn hash(&self, plain: &str) -> Result<String> {
            Ok(format!("plain:{plain}"))
        }

        fn verify(&self, plain: &str, hash: &str) -> bool {
            hash.strip_prefix("plain:") == Some(plain)
        }
    }

    #[tokio::test]
    async fn create_then_find_by_email() {
        let gw = InMemoryUserGateway::new();
        let u = User::new("Usuario X", "usuario@dominio.com", "123456", &Plain).unwrap();
        gw.create(&u).await.unwrap();

        let found = gw.find_by_email("usuario@dominio.com").await.unwrap();
        assert_eq!(found.id(), u.id());
        assert!(found.validate_password("123456", &Plain));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let gw = InMemoryUserGateway::new();
        let a = User::new("A", "same@dominio.com", "1", &Plain).unwrap();
        let b = User::new("B", "same@dominio.com", "2", &Plain).unwrap();
        gw.create(&a).await.unwrap();

        assert!(matches!(
            gw.create(&b).await.unwrap_err(),
            DomainError::Conflict { .. }
        ));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let gw = InMemoryUserGateway::new();
        assert!(matches!(
            gw.find_by_email("nobody@dominio.com").await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
