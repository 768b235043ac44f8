//! # API 响应结构
//!
//! 把上游/校验层产出的各种形态统一成对外的JSON约定：
//! 成功时为 NormalizedResponse，失败时为 `{"error": <原因>}`。

use crate::error::ProxyError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// # 标准错误响应
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// 面向调用方的失败原因
    pub error: String,
}

/// # API响应枚举
///
/// 统一所有API出口，方便转换为 `axum::response::Response`
#[derive(Debug)]
pub enum ApiResponse {
    /// 载荷已带 `data` 字段，原样透传
    Passthrough(Value),
    /// 裸载荷包装成统一信封
    Wrapped {
        /// 记录列表（非列表载荷降级为空列表）
        data: Vec<Value>,
        /// 记录条数
        total: usize,
        /// 原始查询文本
        query: String,
    },
    /// 错误响应
    Error(StatusCode, String),
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Passthrough(value) => (StatusCode::OK, Json(value)).into_response(),
            Self::Wrapped { data, total, query } => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "data": data,
                    "total": total,
                    "query": query,
                })),
            )
                .into_response(),
            Self::Error(status, error) => (status, Json(ErrorBody { error })).into_response(),
        }
    }
}

/// # 便捷函数：搜索成功信封
///
/// 载荷已含 `data` 字段时原样透传；否则按列表包装，
/// 非列表载荷降级为空列表。
pub fn envelope(payload: Value, query: &str) -> Response {
    if payload.get("data").is_some() {
        return ApiResponse::Passthrough(payload).into_response();
    }
    let (data, total) = match payload {
        Value::Array(items) => {
            let total = items.len();
            (items, total)
        }
        _ => (Vec::new(), 0),
    };
    ApiResponse::Wrapped {
        data,
        total,
        query: query.to_string(),
    }
    .into_response()
}

/// # 便捷函数：详情成功响应（载荷原样透传）
pub fn detail_body(payload: Value) -> Response {
    ApiResponse::Passthrough(payload).into_response()
}

/// # 便捷函数：HTTP错误响应
pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    ApiResponse::Error(status, message.into()).into_response()
}

/// # 便捷函数：搜索路径上的应用错误响应
pub fn app_error(err: &ProxyError) -> Response {
    let (status, _code) = err.to_http_response_parts();
    error(status, err.client_message())
}

/// # 便捷函数：详情路径上的应用错误响应
///
/// 详情路径把上游失败按未找到处理，其余与搜索路径一致。
pub fn detail_error(err: &ProxyError) -> Response {
    match err {
        ProxyError::Upstream { .. } => error(StatusCode::NOT_FOUND, err.client_message()),
        other => app_error(other),
    }
}
