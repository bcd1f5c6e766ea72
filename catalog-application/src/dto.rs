//! 数据传输对象（DTO）
//!
//! - 作为应用层的输入/输出载体，面向接口/外部系统序列化友好；
//! - 与领域模型解耦，避免将实体直接暴露到接口层。
//!
use catalog_domain::entity::{Entity, Product, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductOutput {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().to_string(),
            name: p.name().to_string(),
            price: p.price(),
            created_at: *p.created_at(),
        }
    }
}

/// 分页列表查询参数（原样接收，由 `PageRequest` 归一化）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub sort: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserOutput {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for CreateUserOutput {
    fn from(u: &User) -> Self {
        Self {
            id: u.id().to_string(),
            name: u.name().to_string(),
            email: u.email().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetJwtInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetJwtOutput {
    pub access_token: String,
}
