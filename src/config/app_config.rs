//! # 应用配置结构定义

use crate::error::{ProxyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 应用主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 上游目录服务配置
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// HTTP服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 是否启用CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// 上游目录服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// 上游API根地址
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    pub connect_timeout_secs: u64,
    /// 请求携带的 User-Agent
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-pddikti.ridwaanhall.com".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "PDDikti-Proxy/1.0".to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// 未指定配置文件时使用默认值；随后应用 `PDDIKTI_PROXY_*`
    /// 环境变量覆盖。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    ProxyError::config_with_source(
                        format!("无法读取配置文件: {}", path.display()),
                        e,
                    )
                })?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// 应用环境变量覆盖
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// 从给定的查找函数应用覆盖，便于测试注入
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("PDDIKTI_PROXY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PDDIKTI_PROXY_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
        }
        if let Some(url) = lookup("PDDIKTI_PROXY_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }
        if let Some(timeout) = lookup("PDDIKTI_PROXY_UPSTREAM_TIMEOUT")
            && let Ok(timeout) = timeout.parse()
        {
            self.upstream.timeout_secs = timeout;
        }
    }

    /// 获取服务器监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
