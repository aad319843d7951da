use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 证书
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub uuid: String,
    pub student_id: i64,
    pub course_id: i64,
    pub issue_date: NaiveDateTime,
    #[serde(default)]
    pub template_id: Option<String>,
    /// 生成时的学员/课程快照
    #[serde(default)]
    pub data_snapshot: Option<serde_json::Value>,
}

/// 公开验证结果
///
/// 后端返回的 `student`/`course` 可能是名称字符串，也可能是对象，因此保留原始 JSON。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateValidation {
    pub valid: bool,
    pub uuid: String,
    pub issue_date: NaiveDateTime,
    pub student: serde_json::Value,
    pub course: serde_json::Value,
}

impl CertificateValidation {
    /// 学员姓名（字符串或对象中的 `name` 字段）
    pub fn student_name(&self) -> Option<&str> {
        display_name(&self.student)
    }

    /// 课程名称
    pub fn course_name(&self) -> Option<&str> {
        display_name(&self.course)
    }
}

fn display_name(value: &serde_json::Value) -> Option<&str> {
    value
        .as_str()
        .or_else(|| value.get("name").and_then(serde_json::Value::as_str))
}
