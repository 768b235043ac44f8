//! # PDDikti Proxy 主程序
//!
//! 高教目录查询代理服务 - 基于 Axum 的统一搜索/详情接口

use clap::Parser;
use pddikti_proxy::api::ApiServer;
use pddikti_proxy::app::AppContext;
use pddikti_proxy::upstream::PddiktiClient;
use pddikti_proxy::{AppConfig, Result, logging};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "pddikti-proxy", about = "PDDikti 高教目录查询代理服务", version)]
struct Cli {
    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,
    /// 监听地址，覆盖配置文件
    #[arg(long)]
    host: Option<String>,
    /// 监听端口，覆盖配置文件
    #[arg(long)]
    port: Option<u16>,
    /// 上游API根地址，覆盖配置文件
    #[arg(long)]
    upstream_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init_logging(None);

    let cli = Cli::parse();

    // 加载配置：文件 < 环境变量 < 命令行
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }

    info!(
        upstream = %config.upstream.base_url,
        bind = %config.bind_address(),
        "service starting"
    );

    // 进程级上游客户端：启动时构造一次，全程复用连接池
    let directory = PddiktiClient::new(&config.upstream)?;
    let context = Arc::new(AppContext::new(Arc::new(config), Arc::new(directory)));

    if let Err(e) = ApiServer::new(context).serve().await {
        error!(error = %e, "service start failed");
        std::process::exit(1);
    }

    info!("service shutdown");
    Ok(())
}
