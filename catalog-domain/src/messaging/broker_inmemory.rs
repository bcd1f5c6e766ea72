//! 内存版消息代理（InMemoryBroker）
//!
//! 基于 `tokio::sync::mpsc` 的轻量实现，满足 `MessageBroker` 协议：
//! - `declare_queue`/`bind`：声明队列、把交换机绑定到队列；
//! - `publish`：目标为交换机时投递给全部绑定队列，否则按同名队列投递（默认交换机）；
//! - `consume`：每个队列只能被消费一次，返回的流在代理存活期间不会结束；
//! - `unacked`：已投递但尚未确认的消息数。
//!
//! 典型用途：测试环境、示例与本地开发。

use super::{Acknowledger, Delivery, MessageBroker};
use crate::error::{DomainError, DomainResult as Result};
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

struct Message {
    delivery_tag: u64,
    body: Vec<u8>,
}

struct Queue {
    tx: mpsc::UnboundedSender<Message>,
    rx: Option<mpsc::UnboundedReceiver<Message>>,
    unacked: HashSet<u64>,
}

impl Queue {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Some(rx),
            unacked: HashSet::new(),
        }
    }
}

#[derive(Default)]
struct State {
    queues: Mutex<HashMap<String, Queue>>,
    // exchange -> queues
    bindings: Mutex<HashMap<String, Vec<String>>>,
    next_tag: AtomicU64,
}

/// 简单的内存消息代理实现
#[derive(Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<State>,
}

impl InMemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明队列（已存在时为空操作）
    pub fn declare_queue(&self, queue: &str) {
        self.state
            .queues
            .lock()
            .entry(queue.to_string())
            .or_insert_with(Queue::new);
    }

    /// 将交换机绑定到队列（队列不存在时一并声明）
    pub fn bind(&self, exchange: &str, queue: &str) {
        self.declare_queue(queue);

        let mut bindings = self.state.bindings.lock();
        let bound = bindings.entry(exchange.to_string()).or_default();
        if !bound.iter().any(|q| q == queue) {
            bound.push(queue.to_string());
        }
    }

    /// 已投递未确认的消息数；队列不存在时为 0
    pub fn unacked(&self, queue: &str) -> usize {
        self.state
            .queues
            .lock()
            .get(queue)
            .map_or(0, |q| q.unacked.len())
    }

    fn route(&self, destination: &str) -> Vec<String> {
        if let Some(bound) = self.state.bindings.lock().get(destination) {
            return bound.clone();
        }
        if self.state.queues.lock().contains_key(destination) {
            return vec![destination.to_string()];
        }
        Vec::new()
    }
}

#[async_trait]
impl MessageBroker for InMemoryBroker {
    async fn publish(&self, destination: &str, payload: Vec<u8>) -> Result<()> {
        let targets = self.route(destination);
        if targets.is_empty() {
            return Err(DomainError::broker(format!(
                "no route for destination: {destination}"
            )));
        }

        let queues = self.state.queues.lock();
        for name in &targets {
            let Some(queue) = queues.get(name) else {
                continue;
            };
            let delivery_tag = self.state.next_tag.fetch_add(1, Ordering::Relaxed) + 1;
            queue
                .tx
                .send(Message {
                    delivery_tag,
                    body: payload.clone(),
                })
                .map_err(|e| DomainError::broker(e.to_string()))?;
        }

        tracing::debug!(destination, queues = targets.len(), "message published");
        Ok(())
    }

    async fn consume(&self, queue: &str) -> Result<BoxStream<'static, Result<Delivery>>> {
        let rx = {
            let mut queues = self.state.queues.lock();
            let slot = queues
                .get_mut(queue)
                .ok_or_else(|| DomainError::broker(format!("queue not declared: {queue}")))?;
            slot.rx
                .take()
                .ok_or_else(|| DomainError::broker(format!("queue already consumed: {queue}")))?
        };

        let state = self.state.clone();
        let name = queue.to_string();
        let acker: Arc<dyn Acknowledger> = Arc::new(StateAcker {
            state: state.clone(),
        });

        tracing::debug!(queue, "consumer attached");

        let stream = UnboundedReceiverStream::new(rx).map(move |msg| {
            if let Some(q) = state.queues.lock().get_mut(&name) {
                q.unacked.insert(msg.delivery_tag);
            }
            Ok(Delivery::new(
                name.clone(),
                msg.delivery_tag,
                msg.body,
                acker.clone(),
            ))
        });

        Ok(Box::pin(stream))
    }
}

struct StateAcker {
    state: Arc<State>,
}

#[async_trait]
impl Acknowledger for StateAcker {
    async fn ack(&self, queue: &str, delivery_tag: u64) -> Result<()> {
        let mut queues = self.state.queues.lock();
        let acked = queues
            .get_mut(queue)
            .is_some_and(|q| q.unacked.remove(&delivery_tag));

        if !acked {
            return Err(DomainError::broker(format!(
                "unknown delivery tag {delivery_tag} on queue {queue}"
            )));
        }
        Ok(())
    }
}
