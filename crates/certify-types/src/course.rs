use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 学时
    pub workload: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 创建课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub workload: f64,
}

/// 课程部分更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<f64>,
}

/// `/courses/with-classes` 返回的课程及其班级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseWithClasses {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub workload: f64,
    #[serde(default)]
    pub classes: Vec<ClassSummary>,
    #[serde(default)]
    pub total_classes: i64,
}

/// 课程列表中的班级摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub total_slots: i64,
    pub available_slots: i64,
    pub is_open: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub enrolled_students: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_update_skips_unset_fields() {
        let update = CourseUpdate {
            workload: Some(40.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "workload": 40.0 }));
    }

    #[test]
    fn test_course_deserialize() {
        let course: Course = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Rust",
                "description": null,
                "workload": 20.5,
                "created_at": "2024-03-01T10:00:00",
                "updated_at": "2024-03-02T11:30:00.123456"
            }"#,
        )
        .unwrap();
        assert_eq!(course.id, 3);
        assert!(course.description.is_none());
    }
}
