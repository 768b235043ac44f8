//! # 上游实体类型与载荷定义
//!
//! 实体类型是封闭枚举：搜索支持5种，详情仅支持2种。
//! 不支持的类型在路由阶段即被拒绝，不会产生上游调用。

use serde_json::{Map, Value};

/// 搜索实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// 学生（mahasiswa）
    Student,
    /// 讲师（dosen）
    Lecturer,
    /// 专业（prodi）
    Program,
    /// 院校（pt）
    Institution,
    /// 跨全部类别的聚合搜索
    All,
}

impl SearchKind {
    /// 解析调用方传入的类型标记
    ///
    /// 入站标记沿用上游的本地名称。未知标记返回 `None`，
    /// 由调用方转为入参错误。
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "mahasiswa" => Some(Self::Student),
            "dosen" => Some(Self::Lecturer),
            "prodi" => Some(Self::Program),
            "pt" => Some(Self::Institution),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// 上游搜索路径段
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Student => "mhs",
            Self::Lecturer => "dosen",
            Self::Program => "prodi",
            Self::Institution => "pt",
            Self::All => "all",
        }
    }
}

/// 详情实体类型
///
/// 上游仅为学生和讲师提供详情接口；`prodi`/`pt` 虽可搜索，
/// 但在详情路由上一律拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    /// 学生详情
    Student,
    /// 讲师详情
    Lecturer,
}

impl DetailKind {
    /// 解析调用方传入的类型标记
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "mahasiswa" => Some(Self::Student),
            "dosen" => Some(Self::Lecturer),
            _ => None,
        }
    }

    /// 上游详情路径段（学生和讲师的路径结构不同）
    pub const fn path(self) -> &'static str {
        match self {
            Self::Student => "mhs/detail",
            Self::Lecturer => "dosen/profile",
        }
    }
}

/// 上游搜索响应载荷
///
/// 上游JSON形态不固定：单类别搜索在 `data` 下放列表，
/// "all" 搜索在 `data` 下放 类别→列表 的映射，也可能返回
/// 完全不同的形状。按请求类型分类成带标签的变体后，
/// 截断逻辑按变体分派，避免对通用Map做临时性探测。
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
    /// `data` 为扁平记录列表；其余字段原样保留
    Flat {
        /// 记录列表
        data: Vec<Value>,
        /// `data` 以外的其余字段
        rest: Map<String, Value>,
    },
    /// `data` 为 类别→列表 的映射（"all" 搜索）
    Grouped {
        /// 类别映射
        data: Map<String, Value>,
        /// `data` 以外的其余字段
        rest: Map<String, Value>,
    },
    /// 其它形状，不做解释原样透传
    Other(Value),
}

impl SearchPayload {
    /// 按请求的实体类型对上游JSON分类
    ///
    /// 仅做字段存在性检查，不校验记录内部结构。形状与预期
    /// 不符时落入 `Other`，由响应信封兜底包装。
    pub fn from_value(kind: SearchKind, value: Value) -> Self {
        let Value::Object(mut object) = value else {
            return Self::Other(value);
        };
        match (kind, object.remove("data")) {
            (SearchKind::All, Some(Value::Object(data))) => Self::Grouped { data, rest: object },
            (_, Some(Value::Array(data))) => Self::Flat { data, rest: object },
            (_, data) => {
                // 形状不符：恢复原对象透传
                if let Some(data) = data {
                    object.insert("data".to_string(), data);
                }
                Self::Other(Value::Object(object))
            }
        }
    }

    /// 将每个结果列表截断到 `limit`
    ///
    /// "all" 搜索对每个类别独立截断，类别间的合计不受限制。
    #[must_use]
    pub fn truncate(self, limit: usize) -> Self {
        match self {
            Self::Flat { mut data, rest } => {
                data.truncate(limit);
                Self::Flat { data, rest }
            }
            Self::Grouped { mut data, rest } => {
                for entry in data.values_mut() {
                    if let Value::Array(list) = entry {
                        list.truncate(limit);
                    }
                }
                Self::Grouped { data, rest }
            }
            other @ Self::Other(_) => other,
        }
    }

    /// 还原为上游的JSON形状
    pub fn into_value(self) -> Value {
        match self {
            Self::Flat { data, mut rest } => {
                rest.insert("data".to_string(), Value::Array(data));
                Value::Object(rest)
            }
            Self::Grouped { data, mut rest } => {
                rest.insert("data".to_string(), Value::Object(data));
                Value::Object(rest)
            }
            Self::Other(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_kind_parses_native_tokens() {
        assert_eq!(SearchKind::parse("mahasiswa"), Some(SearchKind::Student));
        assert_eq!(SearchKind::parse("dosen"), Some(SearchKind::Lecturer));
        assert_eq!(SearchKind::parse("prodi"), Some(SearchKind::Program));
        assert_eq!(SearchKind::parse("pt"), Some(SearchKind::Institution));
        assert_eq!(SearchKind::parse("all"), Some(SearchKind::All));
        assert_eq!(SearchKind::parse("universitas"), None);
        assert_eq!(SearchKind::parse(""), None);
    }

    #[test]
    fn detail_kind_rejects_searchable_only_types() {
        assert_eq!(DetailKind::parse("mahasiswa"), Some(DetailKind::Student));
        assert_eq!(DetailKind::parse("dosen"), Some(DetailKind::Lecturer));
        assert_eq!(DetailKind::parse("prodi"), None);
        assert_eq!(DetailKind::parse("pt"), None);
        assert_eq!(DetailKind::parse("all"), None);
    }

    #[test]
    fn detail_paths_differ_per_kind() {
        assert_eq!(DetailKind::Student.path(), "mhs/detail");
        assert_eq!(DetailKind::Lecturer.path(), "dosen/profile");
    }

    #[test]
    fn flat_payload_truncates_to_limit() {
        let value = json!({"data": [1, 2, 3, 4, 5], "total": 5});
        let shaped = SearchPayload::from_value(SearchKind::Student, value)
            .truncate(3)
            .into_value();
        assert_eq!(shaped["data"], json!([1, 2, 3]));
        // data 之外的字段原样保留
        assert_eq!(shaped["total"], json!(5));
    }

    #[test]
    fn grouped_payload_truncates_each_category_independently() {
        let value = json!({
            "data": {
                "mahasiswa": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                "dosen": [1],
            }
        });
        let shaped = SearchPayload::from_value(SearchKind::All, value)
            .truncate(3)
            .into_value();
        assert_eq!(shaped["data"]["mahasiswa"], json!([1, 2, 3]));
        assert_eq!(shaped["data"]["dosen"], json!([1]));
    }

    #[test]
    fn shorter_lists_are_left_untouched() {
        let value = json!({"data": [1, 2]});
        let shaped = SearchPayload::from_value(SearchKind::Lecturer, value)
            .truncate(20)
            .into_value();
        assert_eq!(shaped["data"], json!([1, 2]));
    }

    #[test]
    fn unexpected_shapes_pass_through_unchanged() {
        let bare_list = json!([1, 2, 3]);
        let shaped = SearchPayload::from_value(SearchKind::Student, bare_list.clone()).truncate(1);
        assert_eq!(shaped.into_value(), bare_list);

        // 单类别搜索却返回映射：不按 all 的规则截断
        let value = json!({"data": {"mahasiswa": [1, 2, 3]}});
        let shaped = SearchPayload::from_value(SearchKind::Student, value.clone()).truncate(1);
        assert_eq!(shaped.into_value(), value);
    }

    #[test]
    fn grouped_non_list_entries_are_preserved() {
        let value = json!({"data": {"mahasiswa": [1, 2, 3], "meta": "hit"}});
        let shaped = SearchPayload::from_value(SearchKind::All, value)
            .truncate(2)
            .into_value();
        assert_eq!(shaped["data"]["mahasiswa"], json!([1, 2]));
        assert_eq!(shaped["data"]["meta"], json!("hit"));
    }
}
