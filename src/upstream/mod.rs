//! # 上游目录服务模块
//!
//! PDDikti 目录API的客户端抽象：实体类型、响应载荷分类与截断、
//! 以及基于 reqwest 连接池的具体实现

pub mod client;
pub mod types;

pub use client::{DirectoryClient, PddiktiClient};
pub use types::{DetailKind, SearchKind, SearchPayload};
