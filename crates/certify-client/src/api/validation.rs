use certify_types::CertificateValidation;

use crate::client::ApiClient;
use crate::endpoints::validation;
use crate::error::Result;

impl ApiClient {
    /// 公开接口，按 UUID 验证证书
    pub async fn validate_certificate(&self, uuid: &str) -> Result<CertificateValidation> {
        self.get_json(&validation::certificate(uuid)).await
    }
}
