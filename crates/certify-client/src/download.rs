use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use certify_notify::NotifyMessage;
use reqwest::Method;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::options::RequestOptions;
use crate::payload::Payload;

/// 文件保存（“另存为”）
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// 保存文件，返回落地位置
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf>;
}

/// 写入指定目录
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// 文件名只能是单个普通路径分量
fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() || filename == "." || filename == ".." {
        bail!("Invalid filename: {:?}", filename);
    }
    if filename.contains('/') || filename.contains('\\') || filename.contains('\0') {
        bail!("Filename must not contain path separators: {:?}", filename);
    }
    Ok(())
}

#[async_trait]
impl FileSaver for DirectorySaver {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        validate_filename(filename)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, data).await?;

        info!("Saved {} bytes to {}", data.len(), path.display());
        Ok(path)
    }
}

/// 一次保存记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// 只在内存中记录保存操作
#[derive(Debug, Clone, Default)]
pub struct MemorySaver {
    saved: Arc<Mutex<Vec<SavedFile>>>,
}

impl MemorySaver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<SavedFile> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl FileSaver for MemorySaver {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| anyhow!("memory saver lock poisoned"))?;
        saved.push(SavedFile {
            filename: filename.to_string(),
            data: data.to_vec(),
        });
        Ok(PathBuf::from(filename))
    }
}

/// 下载请求参数
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }
}

impl DownloadOptions {
    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            body,
        }
    }
}

impl ApiClient {
    /// 下载文件并交给 [`FileSaver`] 保存
    ///
    /// 结果只通过通知报告，从不返回错误。
    pub async fn download_file(&self, endpoint: &str, filename: &str, options: DownloadOptions) {
        match self.fetch_and_save(endpoint, filename, options).await {
            Ok(path) => {
                info!(filename = %filename, path = %path.display(), "Download completed");
                self.notify(NotifyMessage::success(&self.messages().download_started))
                    .await;
            }
            Err(e) => {
                warn!(filename = %filename, error = %e, "Download failed");
                self.notify(NotifyMessage::error(&self.messages().download_failed))
                    .await;
            }
        }
    }

    async fn fetch_and_save(
        &self,
        endpoint: &str,
        filename: &str,
        options: DownloadOptions,
    ) -> Result<PathBuf> {
        let payload = if options.method == Method::GET && options.body.is_none() {
            self.get(endpoint).await?
        } else {
            self.send(endpoint, RequestOptions::new(options.method).body(options.body))
                .await?
        };

        let Payload::Binary { bytes, content_type } = payload else {
            bail!("Expected a file but received a structured response");
        };

        let saver = self
            .saver
            .as_ref()
            .ok_or_else(|| anyhow!("No file saver configured"))?;

        info!(filename = %filename, content_type = %content_type, size = bytes.len(), "Saving download");
        saver.save(filename, &bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("certificate_1.pdf").is_ok());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("dir\\file.pdf").is_err());
    }

    #[tokio::test]
    async fn test_directory_saver() {
        let temp = TempDir::new().unwrap();
        let saver = DirectorySaver::new(temp.path().join("downloads"));

        let path = saver.save("cert.pdf", b"%PDF-1.4").await.unwrap();

        assert_eq!(path, temp.path().join("downloads").join("cert.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
        assert!(saver.save("../cert.pdf", b"x").await.is_err());
    }

    #[tokio::test]
    async fn test_memory_saver() {
        let saver = MemorySaver::new();
        saver.save("a.zip", &[1, 2]).await.unwrap();

        assert_eq!(
            saver.saved(),
            vec![SavedFile {
                filename: "a.zip".to_string(),
                data: vec![1, 2],
            }]
        );
    }
}
