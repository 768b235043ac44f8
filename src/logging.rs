//! # 日志配置模块
//!
//! 基于 tracing-subscriber 的紧凑日志输出，支持 RUST_LOG 覆盖

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志系统
///
/// 默认过滤规则压低 hyper/reqwest 的连接层噪音，
/// 应用自身保持 debug 级别。
pub fn init_logging(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let default_filter = format!("{level},pddikti_proxy=debug,hyper=warn,reqwest=warn");
    let log_filter = env::var("RUST_LOG").unwrap_or(default_filter);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
