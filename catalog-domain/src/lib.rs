//! 商品目录领域层基础库（catalog-domain）
//!
//! 提供目录服务所需的领域抽象与构件：
//! - 实体（`entity`）：统一标识 `EntityId`、商品 `Product` 与用户 `User`；
//! - 事件系统（`eventing`）：处理器注册表与并发扇出的进程内事件分发器；
//! - 持久化网关（`persist`）：按实体划分的网关协议与分页归一化；
//! - 消息代理（`messaging`）：发布/消费协议与内存实现；
//! - 凭证（`credential`）：口令哈希协议。
//!
//! 本 crate 与存储、传输实现解耦，仅定义领域层接口与最小必要的错误类型，
//! 以便在不同基础设施上进行适配实现。
//!
//! 典型用法：
//! 1. 构造 `InMemoryEventDispatcher`，为事件名称注册处理器；
//! 2. 在用例中创建实体并通过网关持久化；
//! 3. 以 `NamedEvent` 描述发生的事实并 `dispatch`，等待全部处理器完成。
//!
pub mod credential;
pub mod entity;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
#[cfg(feature = "eventing")]
pub mod messaging;
pub mod persist;
