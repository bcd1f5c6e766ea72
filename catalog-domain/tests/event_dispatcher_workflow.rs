use anyhow::Result as AnyResult;
use catalog_domain::error::DomainError;
use catalog_domain::eventing::{
    Event, EventDispatcher, EventHandler, InMemoryEventDispatcher, NamedEvent,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Default)]
struct Recorder {
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl Recorder {
    fn with_delay(ms: u64) -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::from_millis(ms),
            ..Default::default()
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EventHandler for Recorder {
    async fn handle(&self, event: &dyn Event) -> AnyResult<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.seen.lock().unwrap().push(event.name().to_string());
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn event(name: &str) -> Arc<dyn Event> {
    Arc::new(NamedEvent::new(name, serde_json::json!({"order_id": "o-1"})))
}

#[tokio::test]
async fn registered_handler_is_invoked_once() {
    let dispatcher = InMemoryEventDispatcher::new();
    let a = Recorder::with_delay(0);
    dispatcher.register("order.paid", a.clone()).unwrap();

    dispatcher.dispatch(event("order.paid")).await.unwrap();

    assert_eq!(a.calls(), 1);
    assert_eq!(*a.seen.lock().unwrap(), vec!["order.paid".to_string()]);
}

#[tokio::test]
async fn double_registration_yields_single_invocation() {
    let dispatcher = InMemoryEventDispatcher::new();
    let a = Recorder::with_delay(0);
    let handle: Arc<dyn EventHandler> = a.clone();

    dispatcher.register("order.paid", handle.clone()).unwrap();
    let err = dispatcher.register("order.paid", handle.clone()).unwrap_err();
    assert!(matches!(err, DomainError::AlreadyRegistered { .. }));
    assert!(dispatcher.has("order.paid", &handle));

    dispatcher.dispatch(event("order.paid")).await.unwrap();
    assert_eq!(a.calls(), 1);
}

// 暂停时钟下计时确定：并发执行耗时等于最慢的处理器
#[tokio::test(start_paused = true)]
async fn handlers_run_in_parallel_not_in_sequence() {
    let dispatcher = InMemoryEventDispatcher::new();
    let slow = Recorder::with_delay(100);
    let fast = Recorder::with_delay(10);
    dispatcher.register("order.paid", slow.clone()).unwrap();
    dispatcher.register("order.paid", fast.clone()).unwrap();

    let started = Instant::now();
    dispatcher.dispatch(event("order.paid")).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(slow.calls(), 1);
    assert_eq!(fast.calls(), 1);
    assert!(elapsed >= Duration::from_millis(100), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(110), "{elapsed:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_on_real_clock_too() {
    let dispatcher = InMemoryEventDispatcher::new();
    let handlers: Vec<_> = (0..4).map(|_| Recorder::with_delay(200)).collect();
    for h in &handlers {
        dispatcher.register("order.paid", h.clone()).unwrap();
    }

    let started = std::time::Instant::now();
    dispatcher.dispatch(event("order.paid")).await.unwrap();
    let elapsed = started.elapsed();

    assert!(handlers.iter().all(|h| h.calls() == 1));
    assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
    // 串行需要 800ms
    assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");
}

#[tokio::test]
async fn removed_handler_is_skipped() {
    let dispatcher = InMemoryEventDispatcher::new();
    let a = Recorder::with_delay(0);
    let b = Recorder::with_delay(0);
    let a_handle: Arc<dyn EventHandler> = a.clone();
    dispatcher.register("order.paid", a_handle.clone()).unwrap();
    dispatcher.register("order.paid", b.clone()).unwrap();

    dispatcher.remove("order.paid", &a_handle);
    dispatcher.dispatch(event("order.paid")).await.unwrap();

    assert!(!dispatcher.has("order.paid", &a_handle));
    assert_eq!(a.calls(), 0);
    assert_eq!(b.calls(), 1);
}

#[tokio::test]
async fn removing_unsubscribed_handler_changes_nothing() {
    let dispatcher = InMemoryEventDispatcher::new();
    let a = Recorder::with_delay(0);
    let stranger: Arc<dyn EventHandler> = Recorder::with_delay(0);
    dispatcher.register("order.paid", a.clone()).unwrap();

    dispatcher.remove("order.paid", &stranger);
    dispatcher.remove("order.unknown", &stranger);

    assert_eq!(dispatcher.subscription_count(), 1);
    dispatcher.dispatch(event("order.paid")).await.unwrap();
    assert_eq!(a.calls(), 1);
}

#[tokio::test]
async fn clear_silences_every_event_name() {
    let dispatcher = InMemoryEventDispatcher::new();
    let a = Recorder::with_delay(0);
    let c = Recorder::with_delay(0);
    let a_handle: Arc<dyn EventHandler> = a.clone();
    let c_handle: Arc<dyn EventHandler> = c.clone();
    dispatcher.register("order.paid", a_handle.clone()).unwrap();
    dispatcher.register("order.cancelled", c_handle.clone()).unwrap();

    dispatcher.clear();
    dispatcher.dispatch(event("order.paid")).await.unwrap();
    dispatcher.dispatch(event("order.cancelled")).await.unwrap();

    assert!(!dispatcher.has("order.paid", &a_handle));
    assert!(!dispatcher.has("order.cancelled", &c_handle));
    assert_eq!(a.calls(), 0);
    assert_eq!(c.calls(), 0);
}

#[tokio::test]
async fn handlers_only_see_their_event_name() {
    let dispatcher = InMemoryEventDispatcher::new();
    let paid = Recorder::with_delay(0);
    let cancelled = Recorder::with_delay(0);
    dispatcher.register("order.paid", paid.clone()).unwrap();
    dispatcher.register("order.cancelled", cancelled.clone()).unwrap();

    dispatcher.dispatch(event("order.paid")).await.unwrap();
    dispatcher.dispatch(event("order.paid")).await.unwrap();

    assert_eq!(paid.calls(), 2);
    assert_eq!(cancelled.calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registration_and_dispatch_is_safe() {
    let dispatcher = Arc::new(InMemoryEventDispatcher::new());
    let handlers: Vec<_> = (0..32).map(|_| Recorder::with_delay(1)).collect();

    let mut set = tokio::task::JoinSet::new();
    for h in &handlers {
        let dispatcher = dispatcher.clone();
        let h = h.clone();
        set.spawn(async move {
            dispatcher.register("order.paid", h).unwrap();
            dispatcher.dispatch(event("order.paid")).await.unwrap();
        });
    }
    while let Some(res) = set.join_next().await {
        res.unwrap();
    }

    assert_eq!(dispatcher.subscription_count(), 32);
    // 每个处理器至少被自己那次分发调用一次
    assert!(handlers.iter().all(|h| h.calls() >= 1));

    dispatcher.dispatch(event("order.paid")).await.unwrap();
    let total: usize = handlers.iter().map(|h| h.calls()).sum();
    assert!(total >= 64);
}

/// 在处理过程中改动所属分发器的处理器
struct Mutator {
    dispatcher: Arc<InMemoryEventDispatcher>,
    late: Arc<Recorder>,
}

#[async_trait::async_trait]
impl EventHandler for Mutator {
    async fn handle(&self, _event: &dyn Event) -> AnyResult<()> {
        self.dispatcher.register("order.paid", self.late.clone())?;
        self.dispatcher.clear();
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatch_uses_subscribers_snapshot_and_handlers_may_mutate() {
    let dispatcher = Arc::new(InMemoryEventDispatcher::new());
    let late = Recorder::with_delay(0);
    let other = Recorder::with_delay(0);
    dispatcher
        .register(
            "order.paid",
            Arc::new(Mutator {
                dispatcher: dispatcher.clone(),
                late: late.clone(),
            }),
        )
        .unwrap();
    dispatcher.register("order.paid", other.clone()).unwrap();

    let res = tokio::time::timeout(
        Duration::from_secs(2),
        dispatcher.dispatch(event("order.paid")),
    )
    .await;

    assert!(matches!(res, Ok(Ok(()))));
    // 分发开始后注册的处理器不属于本次快照
    assert_eq!(late.calls(), 0);
    assert_eq!(other.calls(), 1);
    assert_eq!(dispatcher.subscription_count(), 0);
}
