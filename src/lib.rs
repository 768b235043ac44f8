//! # PDDikti Proxy System Library
//!
//! 面向 PDDikti 高教目录API的统一搜索/详情代理核心库

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod upstream;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{ProxyError, Result};
