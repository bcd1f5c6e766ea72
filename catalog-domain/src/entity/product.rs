use super::{Entity, EntityId};
use crate::error::{DomainError, DomainResult as Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: EntityId,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// 创建并校验商品
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        let product = Self {
            id: EntityId::new(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// 以既有标识与创建时间重建商品（例如更新场景），同样执行校验
    pub fn restore(
        id: EntityId,
        name: impl Into<String>,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let product = Self {
            id,
            name: name.into(),
            price,
            created_at,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_nil() {
            return Err(DomainError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        if self.price == 0.0 {
            return Err(DomainError::PriceRequired);
        }
        if self.price < 0.0 || !self.price.is_finite() {
            return Err(DomainError::InvalidPrice { price: self.price });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }
}

impl Entity for Product {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
