//! # 上游目录服务客户端
//!
//! 持有进程级 reqwest 连接池，按实体类型构造URL并把
//! 非200响应/传输失败映射为统一的上游错误文本

use crate::config::UpstreamConfig;
use crate::error::{ProxyError, Result};
use crate::upstream::types::{DetailKind, SearchKind, SearchPayload};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 目录服务访问接口
///
/// 进程启动时构造一次，经 `Arc` 注入各请求处理器；
/// 测试中以计数替身实现替换。
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// 获取上游API根路径的状态信息
    async fn fetch_status(&self) -> Result<Value>;

    /// 按实体类型搜索，结果列表截断到 `limit`
    async fn search(&self, kind: SearchKind, query: &str, limit: usize) -> Result<Value>;

    /// 按ID获取单条完整记录
    async fn detail(&self, kind: DetailKind, id: &str) -> Result<Value>;
}

/// PDDikti 目录API客户端
pub struct PddiktiClient {
    client: Client,
    base_url: String,
}

impl PddiktiClient {
    /// 创建新的客户端
    ///
    /// 连接池在进程生命周期内复用，不按请求重建。
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| ProxyError::server_start_with_source("HTTP客户端构建失败", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 执行GET请求，传输失败交由调用方按路径语义映射
    async fn get(&self, url: &str) -> std::result::Result<reqwest::Response, reqwest::Error> {
        debug!(%url, "requesting upstream directory");
        self.client.get(url).send().await
    }
}

#[async_trait]
impl DirectoryClient for PddiktiClient {
    async fn fetch_status(&self) -> Result<Value> {
        let url = format!("{}/", self.base_url);
        let response = self
            .get(&url)
            .await
            .map_err(|e| ProxyError::upstream_with_source(e.to_string(), e))?;

        if response.status() != StatusCode::OK {
            return Err(ProxyError::upstream(format!(
                "HTTP {}",
                response.status().as_u16()
            )));
        }
        let body = response
            .json()
            .await
            .map_err(|e| ProxyError::upstream_with_source(e.to_string(), e))?;
        Ok(body)
    }

    async fn search(&self, kind: SearchKind, query: &str, limit: usize) -> Result<Value> {
        // 上游接受路径段内的标准百分号编码：空格编码为 %20，
        // 非ASCII按UTF-8字节编码
        let encoded = urlencoding::encode(query);
        let url = format!("{}/search/{}/{}/", self.base_url, kind.slug(), encoded);

        let response = self
            .get(&url)
            .await
            .map_err(|e| ProxyError::upstream_with_source(format!("Error: {e}"), e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProxyError::upstream(format!(
                "HTTP {}: no data found",
                status.as_u16()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProxyError::upstream_with_source(format!("Error: {e}"), e))?;

        Ok(SearchPayload::from_value(kind, body)
            .truncate(limit)
            .into_value())
    }

    async fn detail(&self, kind: DetailKind, id: &str) -> Result<Value> {
        let url = format!("{}/{}/{}/", self.base_url, kind.path(), id);

        let response = self
            .get(&url)
            .await
            .map_err(|e| ProxyError::upstream_with_source(e.to_string(), e))?;

        if response.status() != StatusCode::OK {
            return Err(ProxyError::upstream("no data found"));
        }
        let body = response
            .json()
            .await
            .map_err(|e| ProxyError::upstream_with_source(e.to_string(), e))?;
        Ok(body)
    }
}
