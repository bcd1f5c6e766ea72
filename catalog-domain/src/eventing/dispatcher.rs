//! 事件分发器（EventDispatcher）协议
//!
//! 面向事件生产者与订阅者的五个操作：注册、分发、移除、查询与清空。
//! 注册类操作同步完成；分发会并发调用全部订阅者，并在全部完成后返回。
//!
use super::{Event, EventHandler};
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 事件分发器
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// 为事件名称注册处理器；同一处理器重复注册返回 `AlreadyRegistered`
    fn register(&self, event_name: &str, handler: Arc<dyn EventHandler>) -> Result<()>;

    /// 并发调用该事件名称下的全部处理器，等待全部完成后返回
    ///
    /// 无订阅者时直接返回 `Ok(())`；单个处理器的失败不会体现在返回值中。
    async fn dispatch(&self, event: Arc<dyn Event>) -> Result<()>;

    /// 移除处理器；未注册时为空操作
    fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler>);

    /// 处理器当前是否订阅了该事件名称
    fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool;

    /// 清空全部订阅关系
    fn clear(&self);
}
