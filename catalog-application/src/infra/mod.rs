//! 网关的内存实现，满足 `catalog_domain::persist` 中的协议。
//!
//! 典型用途：测试环境、示例与本地开发。
mod inmemory_product_gateway;
mod inmemory_user_gateway;

pub use inmemory_product_gateway::InMemoryProductGateway;
pub use inmemory_user_gateway::InMemoryUserGateway;
