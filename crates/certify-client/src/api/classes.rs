use certify_types::{Class, ClassCreate, ClassStudent, ClassUpdate};

use crate::client::ApiClient;
use crate::endpoints::classes;
use crate::error::Result;
use crate::options::RequestBody;

impl ApiClient {
    pub async fn get_class(&self, id: i64) -> Result<Class> {
        self.get_json(&classes::get(id)).await
    }

    pub async fn create_class(&self, class: &ClassCreate) -> Result<Class> {
        self.post_json(classes::CREATE, class).await
    }

    pub async fn update_class(&self, id: i64, update: &ClassUpdate) -> Result<Class> {
        self.put_json(&classes::update(id), update).await
    }

    /// 切换报名开放状态
    pub async fn toggle_class(&self, id: i64) -> Result<Class> {
        self.put(&classes::toggle(id), RequestBody::Empty)
            .await?
            .json()
    }

    pub async fn delete_class(&self, id: i64) -> Result<Class> {
        self.delete_json(&classes::delete(id)).await
    }

    pub async fn list_classes_by_course(&self, course_id: i64) -> Result<Vec<Class>> {
        self.get_json(&classes::by_course(course_id)).await
    }

    pub async fn list_class_students(&self, id: i64) -> Result<Vec<ClassStudent>> {
        self.get_json(&classes::students(id)).await
    }
}
