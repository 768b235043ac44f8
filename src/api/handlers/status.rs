//! # 上游状态处理器
//!
//! `GET /api/status` — 透传上游API根路径的状态JSON

use crate::api::response;
use crate::api::server::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// 上游状态接口
pub async fn status(State(state): State<AppState>) -> Response {
    match state.directory.fetch_status().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(error = %err, "upstream status check failed");
            response::error(StatusCode::BAD_GATEWAY, err.client_message())
        }
    }
}
