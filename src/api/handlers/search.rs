//! # 搜索处理器
//!
//! `POST /api/search` 与调试用的 `GET /api/test/{type}/{query}`

use crate::api::response;
use crate::api::server::AppState;
use crate::api::validation::SearchRequest;
use crate::upstream::SearchKind;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, response::Response};
use tracing::{info, warn};

/// 调试路径使用的固定返回条数
const PROBE_LIMIT: usize = 5;

/// 搜索接口
///
/// 校验 → 路由 → 上游调用 → 信封，整条流水线按请求独立执行。
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return response::error(StatusCode::BAD_REQUEST, "Invalid JSON data");
    };

    let query = match request.validate() {
        Ok(query) => query,
        Err(err) => return response::app_error(&err),
    };

    info!(
        kind = query.kind.slug(),
        query = %query.text,
        limit = query.limit,
        "dispatching directory search"
    );

    match state.directory.search(query.kind, &query.text, query.limit).await {
        Ok(payload) => response::envelope(payload, &query.text),
        Err(err) => {
            warn!(kind = query.kind.slug(), error = %err, "directory search failed");
            response::app_error(&err)
        }
    }
}

/// 调试搜索接口
///
/// 固定 limit=5，路由规则与正式搜索一致；不做查询长度校验。
pub async fn search_probe(
    State(state): State<AppState>,
    Path((kind, query)): Path<(String, String)>,
) -> Response {
    let Some(kind) = SearchKind::parse(&kind) else {
        return response::error(StatusCode::BAD_REQUEST, "invalid search type");
    };

    let query = query.trim();
    match state.directory.search(kind, query, PROBE_LIMIT).await {
        Ok(payload) => response::envelope(payload, query),
        Err(err) => {
            warn!(kind = kind.slug(), error = %err, "probe search failed");
            response::app_error(&err)
        }
    }
}
