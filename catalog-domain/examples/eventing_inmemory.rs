/// 进程内事件分发示例
/// 展示注册 -> 并发分发 -> 等待全部处理器完成，以及重复注册与移除
use anyhow::Result as AnyResult;
use catalog_domain::eventing::{
    Event, EventDispatcher, EventHandler, InMemoryEventDispatcher, NamedEvent,
};
use std::{sync::Arc, time::Duration};

// ============================================================================
// 处理器
// ============================================================================

struct SendReceipt;

#[async_trait::async_trait]
impl EventHandler for SendReceipt {
    fn handler_name(&self) -> &str {
        "send-receipt"
    }

    async fn handle(&self, event: &dyn Event) -> AnyResult<()> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        println!(
            "[send-receipt] {} at {} payload={}",
            event.name(),
            event.occurred_at(),
            event.payload()
        );
        Ok(())
    }
}

struct ReserveStock;

#[async_trait::async_trait]
impl EventHandler for ReserveStock {
    fn handler_name(&self) -> &str {
        "reserve-stock"
    }

    async fn handle(&self, event: &dyn Event) -> AnyResult<()> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        println!("[reserve-stock] {}", event.name());
        Ok(())
    }
}

struct FlakyAudit;

#[async_trait::async_trait]
impl EventHandler for FlakyAudit {
    fn handler_name(&self) -> &str {
        "flaky-audit"
    }

    async fn handle(&self, _event: &dyn Event) -> AnyResult<()> {
        // 失败只会记录日志，不影响分发返回
        anyhow::bail!("audit store unavailable")
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    let dispatcher = InMemoryEventDispatcher::new();

    let receipt: Arc<dyn EventHandler> = Arc::new(SendReceipt);
    dispatcher.register("order.paid", receipt.clone())?;
    dispatcher.register("order.paid", Arc::new(ReserveStock))?;
    dispatcher.register("order.paid", Arc::new(FlakyAudit))?;

    if let Err(e) = dispatcher.register("order.paid", receipt.clone()) {
        println!("duplicate rejected: {e}");
    }

    let started = std::time::Instant::now();
    dispatcher
        .dispatch_event(NamedEvent::new(
            "order.paid",
            serde_json::json!({"order_id": "o-1", "amount": 42}),
        ))
        .await?;
    println!("all handlers done in {:?}", started.elapsed());

    dispatcher.remove("order.paid", &receipt);
    println!(
        "after remove: has(send-receipt) = {}",
        dispatcher.has("order.paid", &receipt)
    );

    dispatcher.clear();
    dispatcher
        .dispatch_event(NamedEvent::new("order.paid", serde_json::Value::Null))
        .await?;
    println!("after clear: {} subscriptions", dispatcher.subscription_count());

    Ok(())
}
