//! 消息代理（messaging）
//!
//! - `MessageBroker`：发布/消费协议；
//! - `Delivery`：需要显式确认的单条消息；
//! - `InMemoryBroker`：内存实现，便于测试与本地演示。
//!
pub mod broker;
pub mod broker_inmemory;

pub use broker::{Acknowledger, Delivery, MessageBroker};
pub use broker_inmemory::InMemoryBroker;
