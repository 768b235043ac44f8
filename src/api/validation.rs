//! # 入站请求校验
//!
//! 请求体的裁剪、长度检查、limit收敛与实体类型解析。
//! 校验失败一律是入参错误，绝不转发到上游。

use crate::error::{ProxyError, Result};
use crate::upstream::types::{DetailKind, SearchKind};
use serde::Deserialize;
use serde_json::Value;

/// 缺省返回条数
pub const DEFAULT_LIMIT: usize = 20;
/// 单个列表的返回条数上限
pub const MAX_LIMIT: usize = 100;

/// `POST /api/search` 的原始请求体
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// 实体类型标记，缺省为学生搜索
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// 查询文本
    pub query: Option<String>,
    /// 期望的返回条数（接受任意JSON形态，非法值回落默认）
    pub limit: Option<Value>,
}

/// `POST /api/detail` 的原始请求体
#[derive(Debug, Deserialize)]
pub struct DetailRequest {
    /// 实体类型标记，缺省为学生详情
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// 记录ID
    pub id: Option<String>,
}

/// 校验后的搜索请求
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// 实体类型
    pub kind: SearchKind,
    /// 裁剪后的查询文本，长度至少2
    pub text: String,
    /// 收敛到 [1,100] 的返回条数
    pub limit: usize,
}

/// 校验后的详情请求
#[derive(Debug, Clone)]
pub struct DetailQuery {
    /// 实体类型
    pub kind: DetailKind,
    /// 裁剪后的非空ID
    pub id: String,
}

impl SearchRequest {
    /// 校验并规范化搜索请求
    pub fn validate(self) -> Result<SearchQuery> {
        let kind = self.kind.as_deref().unwrap_or("mahasiswa");
        let kind = SearchKind::parse(kind)
            .ok_or_else(|| ProxyError::invalid_input("invalid search type"))?;

        let text = self.query.as_deref().unwrap_or("").trim().to_string();
        if text.is_empty() {
            return Err(ProxyError::invalid_input("query required"));
        }
        if text.chars().count() < 2 {
            return Err(ProxyError::invalid_input(
                "query must be at least 2 characters",
            ));
        }

        Ok(SearchQuery {
            kind,
            text,
            limit: effective_limit(self.limit.as_ref()),
        })
    }
}

impl DetailRequest {
    /// 校验并规范化详情请求
    pub fn validate(self) -> Result<DetailQuery> {
        let kind = self.kind.as_deref().unwrap_or("mahasiswa");
        let kind = DetailKind::parse(kind)
            .ok_or_else(|| ProxyError::invalid_input("only student and lecturer detail available"))?;

        let id = self.id.as_deref().unwrap_or("").trim().to_string();
        if id.is_empty() {
            return Err(ProxyError::invalid_input("id required"));
        }

        Ok(DetailQuery { kind, id })
    }
}

/// 收敛返回条数
///
/// 缺失、非数值或小于1回落默认20；超过100收敛到100。
pub fn effective_limit(raw: Option<&Value>) -> usize {
    let requested = raw.and_then(|value| match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });
    match requested {
        Some(n) if n >= 1 => usize::try_from(n).map_or(MAX_LIMIT, |n| n.min(MAX_LIMIT)),
        _ => DEFAULT_LIMIT,
    }
}
