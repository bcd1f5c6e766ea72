use async_trait::async_trait;
use catalog_domain::entity::{Entity, EntityId, Product};
use catalog_domain::error::{DomainError, DomainResult as Result};
use catalog_domain::persist::{PageRequest, ProductGateway, SortDirection};
use parking_lot::RwLock;

/// 基于内存的商品网关
///
/// 以插入顺序保存，列表按创建时间稳定排序，时间相同时保持插入顺序。
#[derive(Default)]
pub struct InMemoryProductGateway {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

fn not_found(id: &EntityId) -> DomainError {
    DomainError::not_found(format!("product {id}"))
}

#[async_trait]
impl ProductGateway for InMemoryProductGateway {
    async fn create(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write();
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::Conflict {
                reason: format!("product {}", product.id()),
            });
        }
        products.push(product.clone());
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Vec<Product>> {
        let mut sorted = self.products.read().clone();
        sorted.sort_by_key(|p| *p.created_at());
        if page.sort() == SortDirection::Desc {
            sorted.reverse();
        }

        Ok(sorted
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write();
        let slot = products
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or_else(|| not_found(product.id()))?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<()> {
        let mut products = self.products.write();
        let pos = products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| not_found(id))?;
        products.remove(pos);
        Ok(())
    }
}
