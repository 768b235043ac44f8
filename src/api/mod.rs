//! # API服务模块
//!
//! 入站HTTP面：路由、请求校验、处理器与响应信封

pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod validation;

pub use server::{ApiServer, AppState};
