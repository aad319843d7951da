use certify_types::{Course, CourseCreate, CourseUpdate, CourseWithClasses};

use crate::client::ApiClient;
use crate::endpoints::courses;
use crate::error::Result;

impl ApiClient {
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get_json(courses::LIST).await
    }

    /// 课程及其班级概要
    pub async fn list_courses_with_classes(&self) -> Result<Vec<CourseWithClasses>> {
        self.get_json(courses::WITH_CLASSES).await
    }

    pub async fn get_course(&self, id: i64) -> Result<Course> {
        self.get_json(&courses::get(id)).await
    }

    pub async fn create_course(&self, course: &CourseCreate) -> Result<Course> {
        self.post_json(courses::CREATE, course).await
    }

    pub async fn update_course(&self, id: i64, update: &CourseUpdate) -> Result<Course> {
        self.put_json(&courses::update(id), update).await
    }

    pub async fn delete_course(&self, id: i64) -> Result<Course> {
        self.delete_json(&courses::delete(id)).await
    }
}
