//! # 应用上下文模块

pub mod context;

pub use context::AppContext;
