use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 已认证学员信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAuth {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub authorized: bool,
    pub is_active: bool,
}

/// 学员资料更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// 公开的学员信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub cpf: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentInfo {
    pub enrollment_id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub course_id: i64,
    pub course_name: String,
    pub enrollment_date: NaiveDateTime,
    pub is_open: bool,
}

/// 学员仪表盘
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDashboard {
    pub student: StudentAuth,
    pub enrollments: Vec<EnrollmentInfo>,
    pub certificates_count: i64,
}

/// 学员名下的证书
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCertificate {
    pub certificate_id: i64,
    pub uuid: String,
    pub course_name: String,
    pub course_id: i64,
    pub issue_date: NaiveDateTime,
    /// 仅按 CPF 查询时返回
    #[serde(default)]
    pub download_url: Option<String>,
}

/// 按 CPF 查询证书的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCertificates {
    pub student: StudentInfo,
    pub certificates: Vec<StudentCertificate>,
    pub total_certificates: i64,
}
