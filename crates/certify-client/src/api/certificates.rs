use certify_types::Certificate;

use crate::client::ApiClient;
use crate::download::DownloadOptions;
use crate::endpoints::certificates;
use crate::error::Result;
use crate::options::RequestBody;

impl ApiClient {
    /// 为已报名的学员生成单个证书（已存在时返回原证书）
    pub async fn generate_single_certificate(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Certificate> {
        self.post(&certificates::single(student_id, class_id), RequestBody::Empty)
            .await?
            .json()
    }

    /// 打包下载整个班级的证书
    pub async fn download_bulk_certificates(&self, class_id: i64) {
        let filename = format!("certificates_class_{}.zip", class_id);
        self.download_file(
            &certificates::bulk_class(class_id),
            &filename,
            DownloadOptions::post(None),
        )
        .await
    }

    pub async fn download_certificate(&self, id: i64) {
        let filename = format!("certificate_{}.pdf", id);
        self.download_file(&certificates::download(id), &filename, DownloadOptions::default())
            .await
    }

    /// 学员下载自己的证书
    pub async fn download_my_certificate(&self, id: i64) {
        let filename = format!("certificate_{}.pdf", id);
        self.download_file(
            &certificates::my_download(id),
            &filename,
            DownloadOptions::default(),
        )
        .await
    }
}
