//! # 请求处理器模块

pub mod detail;
pub mod search;
pub mod status;
