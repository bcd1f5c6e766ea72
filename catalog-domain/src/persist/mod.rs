//! 持久化网关（persist）
//!
//! 定义每个实体的网关协议与统一的分页请求：
//! - `ProductGateway`：商品的增删改查与分页列表；
//! - `UserGateway`：用户创建与按邮箱查找；
//! - `PageRequest`：偏移、条数与排序方向的归一化。
//!
//! 该模块只定义协议，具体存储后端由上层提供实现并注入。
//!
mod page;
mod product_gateway;
mod user_gateway;

pub use page::{MAX_PAGE_SIZE, PageRequest, SortDirection};
pub use product_gateway::ProductGateway;
pub use user_gateway::UserGateway;
