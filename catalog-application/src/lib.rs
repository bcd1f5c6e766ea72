//! 商品目录应用层（catalog-application）
//!
//! 编排领域实体、网关与事件分发器，提供商品与用户两组用例；
//! 同时承载配置加载、日志初始化与凭证/令牌等基础设施适配。
//!
pub mod config;
pub mod dto;
pub mod error;
pub mod infra;
pub mod product_service;
pub mod security;
pub mod telemetry;
pub mod user_service;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use product_service::ProductService;
pub use user_service::UserService;
