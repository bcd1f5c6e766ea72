//! 商品用例
//!
//! 每个写操作在持久化成功后分发对应的领域事件（`product.created` 等），
//! 并等待全部订阅者处理完毕后返回。
//!
use crate::dto::{CreateProductInput, ListProductsQuery, ProductOutput};
use crate::error::{AppError, AppResult as Result};
use catalog_domain::entity::{Entity, EntityId, Product};
use catalog_domain::eventing::{EventDispatcher, NamedEvent};
use catalog_domain::persist::{PageRequest, ProductGateway};
use std::sync::Arc;

pub const PRODUCT_CREATED: &str = "product.created";
pub const PRODUCT_UPDATED: &str = "product.updated";
pub const PRODUCT_DELETED: &str = "product.deleted";

pub struct ProductService {
    gateway: Arc<dyn ProductGateway>,
    dispatcher: Arc<dyn EventDispatcher>,
}

impl ProductService {
    pub fn new(gateway: Arc<dyn ProductGateway>, dispatcher: Arc<dyn EventDispatcher>) -> Self {
        Self {
            gateway,
            dispatcher,
        }
    }

    pub async fn create(&self, input: CreateProductInput) -> Result<ProductOutput> {
        let product = Product::new(input.name, input.price)?;
        self.gateway.create(&product).await?;

        let output = ProductOutput::from(&product);
        tracing::info!(product_id = %output.id, "product created");
        self.publish(PRODUCT_CREATED, serde_json::to_value(&output)?)
            .await?;

        Ok(output)
    }

    pub async fn get(&self, id: &str) -> Result<ProductOutput> {
        let id = EntityId::parse(id).map_err(AppError::from_domain)?;
        let product = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(AppError::from_domain)?;
        Ok(ProductOutput::from(&product))
    }

    pub async fn list(&self, query: ListProductsQuery) -> Result<Vec<ProductOutput>> {
        let page = PageRequest::new(query.offset, query.limit, &query.sort);
        let products = self.gateway.find_all(page).await?;
        Ok(products.iter().map(ProductOutput::from).collect())
    }

    pub async fn update(&self, id: &str, input: CreateProductInput) -> Result<ProductOutput> {
        let id = EntityId::parse(id).map_err(AppError::from_domain)?;
        let current = self
            .gateway
            .find_by_id(&id)
            .await
            .map_err(AppError::from_domain)?;

        let product = Product::restore(
            *current.id(),
            input.name,
            input.price,
            *current.created_at(),
        )?;
        self.gateway
            .update(&product)
            .await
            .map_err(AppError::from_domain)?;

        let output = ProductOutput::from(&product);
        tracing::info!(product_id = %output.id, "product updated");
        self.publish(PRODUCT_UPDATED, serde_json::to_value(&output)?)
            .await?;

        Ok(output)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = EntityId::parse(id).map_err(AppError::from_domain)?;
        self.gateway
            .delete(&id)
            .await
            .map_err(AppError::from_domain)?;

        tracing::info!(product_id = %id, "product deleted");
        self.publish(PRODUCT_DELETED, serde_json::json!({ "id": id }))
            .await
    }

    async fn publish(&self, name: &str, payload: serde_json::Value) -> Result<()> {
        self.dispatcher
            .dispatch(Arc::new(NamedEvent::new(name, payload)))
            .await?;
        Ok(())
    }
}
