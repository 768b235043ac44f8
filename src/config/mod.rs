//! # 配置管理模块
//!
//! 提供应用配置的定义、文件加载和环境变量覆盖

pub mod app_config;

pub use app_config::{AppConfig, ServerConfig, UpstreamConfig};
