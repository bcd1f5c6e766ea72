use tracing_subscriber::EnvFilter;

/// 初始化全局 tracing 订阅者；`RUST_LOG` 优先，否则使用 `default_directive`
///
/// 重复调用时后续调用被忽略。
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
