//! # 路由配置
//!
//! 定义所有API路由和路由组织

use crate::api::server::AppState;
use crate::api::{handlers, response};
use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 目录查询API
        .nest("/api", api_routes())
        // 健康检查路由
        .route("/health", get(crate::api::server::health_check))
        // 未知路由统一返回JSON形式的未找到
        .fallback(fallback_not_found)
        .with_state(state)
}

/// 目录查询路由
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(handlers::search::search))
        .route("/detail", post(handlers::detail::detail))
        .route("/status", get(handlers::status::status))
        .route("/test/{type}/{query}", get(handlers::search::search_probe))
}

/// 未知路由处理
async fn fallback_not_found() -> Response {
    response::error(StatusCode::NOT_FOUND, "not found")
}
