//! 消息代理（MessageBroker）协议
//!
//! 对外部消息系统的最小封装：向目标（交换机或队列）发布消息，
//! 以及消费某个队列得到 `'static` 生命周期的消息流。
//! 每条 `Delivery` 都需要在处理完成后显式 `ack`。
//!
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use std::sync::Arc;

/// 消息代理
#[async_trait]
pub trait MessageBroker: Send + Sync {
    /// 发布消息到目标（交换机名称或队列名称）
    async fn publish(&self, destination: &str, payload: Vec<u8>) -> Result<()>;

    /// 消费队列；返回的流不会自行结束，也不可重复获取
    async fn consume(&self, queue: &str) -> Result<BoxStream<'static, Result<Delivery>>>;
}

/// 确认回执：由具体代理实现
#[async_trait]
pub trait Acknowledger: Send + Sync {
    async fn ack(&self, queue: &str, delivery_tag: u64) -> Result<()>;
}

/// 投递给消费者的一条消息
pub struct Delivery {
    queue: String,
    delivery_tag: u64,
    body: Vec<u8>,
    acker: Arc<dyn Acknowledger>,
}

impl Delivery {
    pub fn new(
        queue: impl Into<String>,
        delivery_tag: u64,
        body: Vec<u8>,
        acker: Arc<dyn Acknowledger>,
    ) -> Self {
        Self {
            queue: queue.into(),
            delivery_tag,
            body,
            acker,
        }
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn delivery_tag(&self) -> u64 {
        self.delivery_tag
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 以 UTF-8 解读消息体（非法字节以替换字符表示）
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// 确认消息已处理
    pub async fn ack(self) -> Result<()> {
        self.acker.ack(&self.queue, self.delivery_tag).await
    }
}

impl std::fmt::Debug for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delivery")
            .field("queue", &self.queue)
            .field("delivery_tag", &self.delivery_tag)
            .field("body_len", &self.body.len())
            .finish()
    }
}
