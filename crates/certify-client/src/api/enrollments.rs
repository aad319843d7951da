use certify_types::{ClassWithCourse, EnrollmentDetail, EnrollmentResponse};

use crate::client::ApiClient;
use crate::endpoints::enrollments;
use crate::error::Result;
use crate::options::RequestBody;

impl ApiClient {
    pub async fn available_classes(&self) -> Result<Vec<ClassWithCourse>> {
        self.get_json(enrollments::AVAILABLE).await
    }

    pub async fn enroll(&self, class_id: i64) -> Result<EnrollmentResponse> {
        self.post(&enrollments::enroll(class_id), RequestBody::Empty)
            .await?
            .json()
    }

    pub async fn my_enrollments(&self) -> Result<Vec<EnrollmentDetail>> {
        self.get_json(enrollments::MY_ENROLLMENTS).await
    }

    pub async fn cancel_enrollment(&self, enrollment_id: i64) -> Result<EnrollmentResponse> {
        self.delete_json(&enrollments::cancel(enrollment_id)).await
    }
}
