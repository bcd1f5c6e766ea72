use super::PageRequest;
use crate::entity::{EntityId, Product};
use crate::error::DomainResult as Result;
use async_trait::async_trait;

/// 商品网关
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn create(&self, product: &Product) -> Result<()>;

    /// 按创建时间排序的一页商品（`PageRequest` 已归一化）
    async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>>;

    /// 不存在时返回 `NotFound`
    async fn find_by_id(&self, id: &EntityId) -> Result<Product>;

    /// 不存在时返回 `NotFound`
    async fn update(&self, product: &Product) -> Result<()>;

    /// 不存在时返回 `NotFound`
    async fn delete(&self, id: &EntityId) -> Result<()>;
}
