//! 处理器注册表（HandlerRegistry）
//!
//! 维护“事件名称 → 处理器列表”的映射：
//! - 同一事件名称下，同一处理器（按身份）至多出现一次；
//! - 列表保持注册顺序，仅用于记账，不代表执行顺序；
//! - 注册表本身不做同步，由所属的分发器加锁保护。
//!
use super::EventHandler;
use super::handler::same_handler;
use crate::error::{DomainError, DomainResult as Result};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    by_name: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册处理器；已存在同一身份时返回 `AlreadyRegistered` 且不做任何修改
    pub fn register(&mut self, event_name: &str, handler: Arc<dyn EventHandler>) -> Result<()> {
        if self.has(event_name, &handler) {
            return Err(DomainError::AlreadyRegistered {
                event: event_name.to_string(),
                handler: handler.handler_name().to_string(),
            });
        }

        self.by_name
            .entry(event_name.to_string())
            .or_default()
            .push(handler);

        Ok(())
    }

    /// 移除第一个匹配的处理器；事件名或处理器不存在时为空操作
    pub fn remove(&mut self, event_name: &str, handler: &Arc<dyn EventHandler>) {
        let Some(list) = self.by_name.get_mut(event_name) else {
            return;
        };

        if let Some(pos) = list.iter().position(|h| same_handler(h, handler)) {
            list.remove(pos);
        }

        if list.is_empty() {
            self.by_name.remove(event_name);
        }
    }

    pub fn has(&self, event_name: &str, handler: &Arc<dyn EventHandler>) -> bool {
        self.by_name
            .get(event_name)
            .is_some_and(|list| list.iter().any(|h| same_handler(h, handler)))
    }

    pub fn clear(&mut self) {
        self.by_name.clear();
    }

    /// 当前订阅者快照（克隆 `Arc`），供分发时在锁外使用
    pub fn handlers_for(&self, event_name: &str) -> Vec<Arc<dyn EventHandler>> {
        self.by_name.get(event_name).cloned().unwrap_or_default()
    }

    /// 已注册的事件名称列表（无序）
    pub fn event_names(&self) -> Vec<&str> {
        self.by_name.keys().map(String::as_str).collect()
    }

    /// 全部 (事件名称, 处理器) 关联数
    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
