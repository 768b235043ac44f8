//! # API服务器
//!
//! Axum HTTP服务器，承载目录查询API

use crate::app::context::AppContext;
use crate::error::{ProxyError, Result};
use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use std::ops::Deref;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// API服务器应用状态
#[derive(Clone)]
pub struct AppState {
    context: Arc<AppContext>,
}

impl AppState {
    /// 创建应用状态
    #[must_use]
    pub const fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }
}

impl Deref for AppState {
    type Target = AppContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

/// API服务器
pub struct ApiServer {
    state: AppState,
    router: Router,
}

impl ApiServer {
    /// 创建新的API服务器
    pub fn new(context: Arc<AppContext>) -> Self {
        let state = AppState::new(context);
        let router = Self::create_router(state.clone());
        Self { state, router }
    }

    /// 创建路由器，叠加请求追踪与CORS中间件
    fn create_router(state: AppState) -> Router {
        let enable_cors = state.config.server.enable_cors;
        let router = super::routes::create_routes(state);

        let router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
        if enable_cors {
            router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            router
        }
    }

    /// 运行服务器直至进程退出
    pub async fn serve(self) -> Result<()> {
        let address = self.state.config.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            ProxyError::server_start_with_source(format!("无法监听地址 {address}"), e)
        })?;

        info!(%address, "API server listening");

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ProxyError::server_start_with_source("服务器运行失败", e))
    }
}

/// 健康检查接口
pub async fn health_check() -> Response {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
    .into_response()
}
