//! # 应用上下文
//!
//! 聚合进程级共享资源：配置与上游客户端连接池。
//! 客户端以trait对象注入，测试中可替换为替身实现。

use crate::config::AppConfig;
use crate::upstream::DirectoryClient;
use std::sync::Arc;

/// 进程级应用上下文
pub struct AppContext {
    /// 应用配置
    pub config: Arc<AppConfig>,
    /// 共享的上游目录客户端
    pub directory: Arc<dyn DirectoryClient>,
}

impl AppContext {
    /// 创建应用上下文
    pub fn new(config: Arc<AppConfig>, directory: Arc<dyn DirectoryClient>) -> Self {
        Self { config, directory }
    }
}
