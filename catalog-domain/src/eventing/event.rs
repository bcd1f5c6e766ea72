//! 事件（Event）
//!
//! 分发器只依赖事件的三项能力：稳定名称（订阅查找的键）、发生时间与不透明载荷。
//! 事件一经构造即不可变，分发时以 `Arc<dyn Event>` 在各处理器任务间共享。
//!
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 可被分发的事件
pub trait Event: Send + Sync + 'static {
    /// 事件名称，例如 `order.paid`
    fn name(&self) -> &str;
    /// 事件发生时间
    fn occurred_at(&self) -> DateTime<Utc>;
    /// 生产者自定义的载荷，分发器不做解释
    fn payload(&self) -> &serde_json::Value;
}

/// 通用事件实现：名称 + 时间 + JSON 载荷
///
/// ```rust
/// use catalog_domain::eventing::{Event, NamedEvent};
///
/// let ev = NamedEvent::builder()
///     .name("order.paid")
///     .payload(serde_json::json!({"order_id": "o-1"}))
///     .build();
/// assert_eq!(ev.name(), "order.paid");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEvent {
    #[builder(into)]
    name: String,
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
    #[builder(default)]
    payload: serde_json::Value,
}

impl NamedEvent {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::builder().name(name).payload(payload).build()
    }
}

impl Event for NamedEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
