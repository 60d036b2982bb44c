//! 日志初始化
//!
//! 宿主进程启动时调用一次。通过 RUST_LOG 环境变量控制日志级别，
//! 默认为 info，例如: RUST_LOG=message_notify=debug

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化 tracing 日志系统（重复调用时后续调用无效果）
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("message_notify=info"));

    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
