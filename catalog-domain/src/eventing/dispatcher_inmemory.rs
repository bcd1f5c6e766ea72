//! 进程内事件分发器（InMemoryEventDispatcher）
//!
//! 满足 `EventDispatcher` 协议的 tokio 实现：
//! - 注册表由一把读写锁保护，注册/移除/清空取写锁，查询与分发查找取读锁；
//! - 分发时先在锁内取订阅者快照，再在锁外为每个处理器 spawn 一个任务；
//! - 以 `JoinSet` 作为计数屏障，等待本次 spawn 的全部任务结束后返回。
//!
//! 注意：处理器的错误与 panic 只记录日志，不会传播给调用方；
//! 永不结束的处理器会使 `dispatch` 一直挂起（不提供超时）。
//! `dispatch` 需要在 tokio 运行时内调用。

use super::{Event, EventDispatcher, EventHandler, HandlerRegistry};
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Default)]
pub struct InMemoryEventDispatcher {
    registry: RwLock<HandlerRegistry>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分发一个具体类型的事件（内部包装为 `Arc<dyn Event>`）
    pub async fn dispatch_event<E: Event>(&self, event: E) -> Result<()> {
        self.dispatch(Arc::new(event)).await
    }

    /// 当前全部订阅关系数
    pub fn subscription_count(&self) -> usize {
        self.registry.read().len()
    }
}

#[async_trait]
impl EventDispatcher for InMemoryEventDispatcher {
    fn register(&self, event_name: &str, handler: Arc<dyn EventHandler>) -> Result<()> {
        let name = handler.handler_name().to_string();
        self.registry.write().register(event_name, handler)?;
        tracing::debug!(event = event_name, handler = %name, "event handler registered");
        Ok(())
    }

    async fn dispatch(&self, event: Arc<dyn Event>) -> Result<()> {
        let handlers = self.registry.read().handlers_for(event.name());
        if handlers.is_empty() {
            tracing::trace!(event = event.name(), "no handler subscribed");
            return Ok(());
        }

        tracing::debug!(
            event = event.name(),
            handlers = handlers.len(),
            "dispatching event"
        );

        let mut tasks = JoinSet::new();
        for handler in handlers {
            let event = Arc::clone(&event);
            tasks.spawn(async move {
                if let Err(err) = handler.handle(event.as_ref()).await {
                    tracing::warn!(
                        event = event.name(),
                        handler = handler.handler_name(),
                        error = %err,
                        "event handler failed"
                    );
                }
            });
        }

        // 屏障：每个任务无论成功、失败或 panic 都恰好结束一次
        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                tracing::error!(event = event.name(), error = %err, "event handler task aborted");
            }
        }

        Ok(())
    }

    fn remove(&self, event_name: &str, handler: &Arc<dyn EventHandler>) {
        self.registry.write().remove(event_name, handler);
    }

    fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool {
        self.registry.read().has(event_name, handler)
    }

    fn clear(&self) {
        self.registry.write().clear();
        tracing::debug!("event handlers cleared");
    }
}
