//! 事件子系统（eventing）
//!
//! 提供进程内事件分发的基础抽象与实现：
//! - `Event`：具备名称、时间与载荷的不可变事件；
//! - `EventHandler`：订阅方处理逻辑，按身份区分；
//! - `HandlerRegistry`：事件名称到处理器列表的映射，保证同名下处理器不重复；
//! - `EventDispatcher`：注册/分发/移除/查询/清空协议；
//! - `InMemoryEventDispatcher`：扇出并发调用、等待全部完成的 tokio 实现。
//!
//! 分发器不保证处理器间的顺序，不持久化事件，不重试失败的处理器，也不限制并发。
//!
pub mod dispatcher;
pub mod dispatcher_inmemory;
pub mod event;
pub mod handler;
pub mod registry;

pub use dispatcher::EventDispatcher;
pub use dispatcher_inmemory::InMemoryEventDispatcher;
pub use event::{Event, NamedEvent};
pub use handler::EventHandler;
pub use registry::HandlerRegistry;
