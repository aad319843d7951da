use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 报名/取消报名结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub message: String,
    #[serde(default)]
    pub enrollment_id: Option<i64>,
    pub class_id: i64,
    pub class_name: String,
}

/// 学员的报名记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentDetail {
    pub enrollment_id: i64,
    pub class_id: i64,
    pub class_name: String,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub course_name: String,
    pub enrollment_date: NaiveDateTime,
    pub is_open: bool,
}
