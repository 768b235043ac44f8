//! # 详情处理器
//!
//! `POST /api/detail` — 仅学生和讲师有详情接口

use crate::api::response;
use crate::api::server::AppState;
use crate::api::validation::DetailRequest;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, response::Response};
use tracing::{info, warn};

/// 详情接口
///
/// 上游失败在详情路径上按未找到（404）透出。
pub async fn detail(
    State(state): State<AppState>,
    payload: Result<Json<DetailRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return response::error(StatusCode::BAD_REQUEST, "Invalid JSON data");
    };

    let query = match request.validate() {
        Ok(query) => query,
        Err(err) => return response::detail_error(&err),
    };

    info!(kind = ?query.kind, id = %query.id, "dispatching directory detail lookup");

    match state.directory.detail(query.kind, &query.id).await {
        Ok(payload) => response::detail_body(payload),
        Err(err) => {
            warn!(kind = ?query.kind, id = %query.id, error = %err, "detail lookup failed");
            response::detail_error(&err)
        }
    }
}
