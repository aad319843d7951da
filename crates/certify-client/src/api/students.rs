use certify_types::{
    StudentAuth, StudentCertificate, StudentCertificates, StudentDashboard, StudentProfileUpdate,
};

use crate::client::ApiClient;
use crate::endpoints::students;
use crate::error::Result;

impl ApiClient {
    pub async fn my_profile(&self) -> Result<StudentAuth> {
        self.get_json(students::ME).await
    }

    pub async fn update_my_profile(&self, update: &StudentProfileUpdate) -> Result<StudentAuth> {
        self.put_json(students::UPDATE_PROFILE, update).await
    }

    pub async fn my_dashboard(&self) -> Result<StudentDashboard> {
        self.get_json(students::DASHBOARD).await
    }

    pub async fn my_certificates(&self) -> Result<Vec<StudentCertificate>> {
        self.get_json(students::MY_CERTIFICATES).await
    }

    /// 公开接口，按 CPF 查询证书
    pub async fn certificates_by_cpf(&self, cpf: &str) -> Result<StudentCertificates> {
        self.get_json(&students::certificates_by_cpf(cpf)).await
    }
}
