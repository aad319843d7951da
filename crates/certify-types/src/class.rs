use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

fn default_template() -> String {
    "default".to_string()
}

/// 班级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub total_slots: i64,
    pub available_slots: i64,
    #[serde(default = "default_template")]
    pub certificate_template: String,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    pub is_open: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// 创建班级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCreate {
    pub course_id: i64,
    pub name: String,
    pub total_slots: i64,
    #[serde(default = "default_template")]
    pub certificate_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

/// 班级部分更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_slots: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
}

/// 带课程名称的班级（可报名列表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassWithCourse {
    #[serde(flatten)]
    pub class: Class,
    pub course_name: String,
    pub enrollment_count: i64,
}

/// 班级内的学员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub authorized: bool,
    pub enrollment_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_with_course_flatten() {
        let item: ClassWithCourse = serde_json::from_value(serde_json::json!({
            "id": 7,
            "course_id": 2,
            "name": "Turma A",
            "total_slots": 30,
            "available_slots": 12,
            "is_open": true,
            "course_name": "Rust",
            "enrollment_count": 18
        }))
        .unwrap();

        assert_eq!(item.class.id, 7);
        assert_eq!(item.class.certificate_template, "default");
        assert!(item.class.is_active);
        assert_eq!(item.enrollment_count, 18);
    }
}
