//! 事件处理器（EventHandler）
//!
//! 定义订阅方对某个已分发事件的处理逻辑与元信息（名称）。
//!
use super::Event;
use async_trait::async_trait;
use std::sync::Arc;

/// 事件处理器：每次分发到其订阅的事件时被调用一次
///
/// 处理完成即以 future 结束为信号；无论返回 `Ok`、`Err` 还是 panic，
/// 分发器都计为一次完成。处理结果不会回传给 `dispatch` 的调用方。
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    /// 处理器名称（用于日志与错误信息）
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    async fn handle(&self, event: &dyn Event) -> anyhow::Result<()>;
}

/// 按身份（同一分配）比较两个处理器，忽略 vtable
pub(crate) fn same_handler(a: &Arc<dyn EventHandler>, b: &Arc<dyn EventHandler>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
