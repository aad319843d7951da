use anyhow::{anyhow, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::ClientConfig;

/// 环境变量前缀，如 `CERTIFY_API__BASE_URL`
const ENV_PREFIX: &str = "CERTIFY";

/// 配置加载器
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 加载配置：默认值 < 配置文件 < 环境变量
    pub fn load(&self) -> Result<ClientConfig> {
        let mut builder = Config::builder();

        if self.path.exists() {
            debug!(path = ?self.path, "Loading client config");
            builder = builder.add_source(File::new(
                self.path.to_str().ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ));
        } else {
            debug!(path = ?self.path, "Config file not found, using defaults");
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let client: ClientConfig = config.try_deserialize()?;
        Self::validate(&client)?;
        Ok(client)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 渲染为 TOML 文本
    pub fn render(config: &ClientConfig) -> Result<String> {
        Ok(toml::to_string_pretty(config)?)
    }

    /// 写入配置文件，必要时创建父目录
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        Self::validate(config)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, Self::render(config)?)?;

        debug!(path = ?self.path, "Client config saved");
        Ok(())
    }

    /// 验证配置
    pub fn validate(config: &ClientConfig) -> Result<()> {
        let base_url = config.api.base_url.trim();
        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
            .ok_or_else(|| anyhow!("base_url must start with http:// or https://: {}", base_url))?;

        if host.trim_matches('/').is_empty() {
            return Err(anyhow!("base_url has no host: {}", base_url));
        }

        if !config.api.api_version.starts_with('/') {
            return Err(anyhow!(
                "api_version must start with '/': {}",
                config.api.api_version
            ));
        }

        if config.api.request_timeout_ms == 0 {
            return Err(anyhow!("request_timeout_ms must be greater than 0"));
        }

        if config.session.token_expiry_minutes == 0 {
            return Err(anyhow!("token_expiry_minutes must be greater than 0"));
        }

        Ok(())
    }
}
