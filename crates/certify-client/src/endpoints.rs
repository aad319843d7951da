//! 后端接口路径，均相对于 API 版本前缀

use std::fmt::Display;

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// 认证
pub mod auth {
    pub const ADMIN_LOGIN: &str = "/login/access-token";
    pub const STUDENT_REGISTER: &str = "/students/register";
    pub const STUDENT_LOGIN: &str = "/students/login";
}

/// 课程
pub mod courses {
    use super::Display;

    pub const LIST: &str = "/courses/";
    pub const CREATE: &str = "/courses/";
    pub const WITH_CLASSES: &str = "/courses/with-classes";

    pub fn get(id: impl Display) -> String {
        format!("/courses/{}", id)
    }

    pub fn update(id: impl Display) -> String {
        get(id)
    }

    pub fn delete(id: impl Display) -> String {
        get(id)
    }
}

/// 班级
pub mod classes {
    use super::Display;

    pub const CREATE: &str = "/classes/";

    pub fn get(id: impl Display) -> String {
        format!("/classes/{}", id)
    }

    pub fn update(id: impl Display) -> String {
        get(id)
    }

    pub fn delete(id: impl Display) -> String {
        get(id)
    }

    pub fn toggle(id: impl Display) -> String {
        format!("/classes/{}/toggle", id)
    }

    pub fn by_course(course_id: impl Display) -> String {
        format!("/classes/course/{}", course_id)
    }

    pub fn students(id: impl Display) -> String {
        format!("/classes/{}/students", id)
    }
}

/// 学员
pub mod students {
    pub const ME: &str = "/students/me";
    pub const UPDATE_PROFILE: &str = "/students/me";
    pub const DASHBOARD: &str = "/students/me/dashboard";
    pub const MY_CERTIFICATES: &str = "/students/me/certificates";

    pub fn certificates_by_cpf(cpf: &str) -> String {
        format!("/students/cpf/{}/certificates", super::encode(cpf))
    }
}

/// 报名
pub mod enrollments {
    use super::Display;

    pub const AVAILABLE: &str = "/enrollments/classes/available";
    pub const MY_ENROLLMENTS: &str = "/enrollments/me";

    pub fn enroll(class_id: impl Display) -> String {
        format!("/enrollments/?class_id={}", class_id)
    }

    pub fn cancel(enrollment_id: impl Display) -> String {
        format!("/enrollments/{}", enrollment_id)
    }
}

/// 证书
pub mod certificates {
    use super::Display;

    pub fn bulk_class(class_id: impl Display) -> String {
        format!("/certificates/bulk-class?class_id={}", class_id)
    }

    pub fn single(student_id: impl Display, class_id: impl Display) -> String {
        format!(
            "/certificates/single?student_id={}&class_id={}",
            student_id, class_id
        )
    }

    pub fn download(id: impl Display) -> String {
        format!("/certificates/{}/download", id)
    }

    pub fn my_download(id: impl Display) -> String {
        format!("/students/me/certificates/{}/download", id)
    }
}

/// 证书验证
pub mod validation {
    pub fn certificate(uuid: &str) -> String {
        format!("/validate/{}", super::encode(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(courses::get(3), "/courses/3");
        assert_eq!(classes::toggle(7), "/classes/7/toggle");
        assert_eq!(classes::by_course(2), "/classes/course/2");
        assert_eq!(enrollments::enroll(9), "/enrollments/?class_id=9");
        assert_eq!(
            certificates::single(4, 5),
            "/certificates/single?student_id=4&class_id=5"
        );
        assert_eq!(certificates::bulk_class(1), "/certificates/bulk-class?class_id=1");
        assert_eq!(
            certificates::my_download(12),
            "/students/me/certificates/12/download"
        );
    }

    #[test]
    fn test_string_segments_are_encoded() {
        assert_eq!(
            students::certificates_by_cpf("123.456.789-00"),
            "/students/cpf/123.456.789-00/certificates"
        );
        assert_eq!(
            students::certificates_by_cpf("123 456/789"),
            "/students/cpf/123%20456%2F789/certificates"
        );
        assert_eq!(validation::certificate("a b"), "/validate/a%20b");
    }
}
