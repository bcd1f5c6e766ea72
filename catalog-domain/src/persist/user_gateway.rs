use crate::entity::User;
use crate::error::DomainResult as Result;
use async_trait::async_trait;

/// 用户网关
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// 邮箱重复时返回 `Conflict`
    async fn create(&self, user: &User) -> Result<()>;

    /// 不存在时返回 `NotFound`
    async fn find_by_email(&self, email: &str) -> Result<User>;
}
