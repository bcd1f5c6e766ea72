//! 实体（Entity）
//!
//! 统一的标识类型 `EntityId` 与目录中的两个实体：商品 `Product` 与用户 `User`。
//! 实体在构造时完成校验，非法输入以 `DomainError` 的校验类变体返回。
//!
mod id;
mod product;
mod user;

pub use id::EntityId;
pub use product::Product;
pub use user::User;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 获取实体标识
    fn id(&self) -> &EntityId;
}
