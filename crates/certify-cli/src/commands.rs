use anyhow::{bail, Context, Result};
use certify_client::{ApiClient, DirectorySaver};
use certify_config::{ClientConfig, ConfigLoader};
use certify_notify::{NotifyLevel, NotifyManager, TracingNotifier};
use certify_session::{FileStorage, SessionStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::info;

use crate::indicator::StatusLine;
use crate::{CertificateCommands, ClassCommands, Cli, Commands, CourseCommands, LoginCommands};

const SESSION_FALLBACK: &str = ".certify-session.json";

/// 默认会话文件：`~/.certify/session.json`，无主目录时使用当前目录
pub fn default_session_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".certify").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(SESSION_FALLBACK))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

struct Connection {
    client: ApiClient,
    session: Arc<SessionStore>,
}

async fn connect(
    config: &ClientConfig,
    session_file: &Path,
    out: Option<&Path>,
) -> Result<Connection> {
    let storage = FileStorage::open(session_file)
        .with_context(|| format!("Failed to open session file {}", session_file.display()))?;
    let session = Arc::new(SessionStore::from_config(Arc::new(storage), &config.session));

    let notifier = NotifyManager::new(NotifyLevel::Info);
    notifier.register(Box::new(TracingNotifier::new())).await;

    let mut builder = ApiClient::builder(config, session.clone())
        .notifier(Arc::new(notifier))
        .loading(Arc::new(StatusLine::new()));
    if let Some(dir) = out {
        builder = builder.file_saver(Arc::new(DirectorySaver::new(dir)));
    }

    Ok(Connection {
        client: builder.build()?,
        session,
    })
}

pub async fn run(cli: Cli) -> Result<()> {
    if let Commands::InitConfig { output } = &cli.command {
        return init_config(output.as_deref());
    }

    let config = ConfigLoader::new(&cli.config).load()?;
    let session_file = cli.session_file.unwrap_or_else(default_session_path);

    match cli.command {
        Commands::Login { command } => {
            let ctx = connect(&config, &session_file, None).await?;
            let role = match command {
                LoginCommands::Admin { username, password } => {
                    ctx.client.login_admin(&username, &password).await?;
                    "admin"
                }
                LoginCommands::Student { email, password } => {
                    ctx.client.login_student(&email, &password).await?;
                    "student"
                }
            };
            info!(session_file = %session_file.display(), "Session stored");
            print_json(&serde_json::json!({ "authenticated": true, "role": role }))
        }

        Commands::Logout => {
            let ctx = connect(&config, &session_file, None).await?;
            ctx.client.logout().await;
            Ok(())
        }

        Commands::Status => {
            let ctx = connect(&config, &session_file, None).await?;
            let authenticated = ctx.session.is_authenticated();
            let snapshot = ctx.session.snapshot();
            let expires_at = snapshot
                .issued_at
                .map(|issued| issued + ctx.session.ttl());

            print_json(&serde_json::json!({
                "authenticated": authenticated,
                "role": snapshot.role,
                "issued_at": snapshot.issued_at,
                "expires_at": expires_at,
                "token": snapshot.masked_token(),
            }))
        }

        Commands::Courses { command } => {
            let ctx = connect(&config, &session_file, None).await?;
            match command {
                CourseCommands::List { with_classes: true } => {
                    print_json(&ctx.client.list_courses_with_classes().await?)
                }
                CourseCommands::List { with_classes: false } => {
                    print_json(&ctx.client.list_courses().await?)
                }
            }
        }

        Commands::Classes { command } => {
            let ctx = connect(&config, &session_file, None).await?;
            match command {
                ClassCommands::Students { class_id } => {
                    print_json(&ctx.client.list_class_students(class_id).await?)
                }
            }
        }

        Commands::Certificates { command } => match command {
            CertificateCommands::Download { id, out } => {
                let ctx = connect(&config, &session_file, Some(&out)).await?;
                let target = out.join(format!("certificate_{}.pdf", id));
                let before = modified_at(&target);
                if ctx.session.is_student() {
                    ctx.client.download_my_certificate(id).await;
                } else {
                    ctx.client.download_certificate(id).await;
                }
                ensure_saved(&target, before)
            }
            CertificateCommands::Bulk { class_id, out } => {
                let ctx = connect(&config, &session_file, Some(&out)).await?;
                let target = out.join(format!("certificates_class_{}.zip", class_id));
                let before = modified_at(&target);
                ctx.client.download_bulk_certificates(class_id).await;
                ensure_saved(&target, before)
            }
            CertificateCommands::ByCpf { cpf } => {
                let ctx = connect(&config, &session_file, None).await?;
                print_json(&ctx.client.certificates_by_cpf(&cpf).await?)
            }
        },

        Commands::Validate { uuid } => {
            let ctx = connect(&config, &session_file, None).await?;
            print_json(&ctx.client.validate_certificate(&uuid).await?)
        }

        Commands::InitConfig { output } => init_config(output.as_deref()),
    }
}

fn init_config(output: Option<&Path>) -> Result<()> {
    let config = ClientConfig::default();
    match output {
        Some(path) => {
            if path.exists() {
                bail!("Refusing to overwrite existing file {}", path.display());
            }
            ConfigLoader::new(path).save(&config)?;
            info!("Config written to {}", path.display());
        }
        None => print!("{}", ConfigLoader::render(&config)?),
    }
    Ok(())
}

fn modified_at(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// 下载结果只通过通知报告，这里以文件是否被写入决定退出码
fn ensure_saved(path: &Path, before: Option<SystemTime>) -> Result<()> {
    let after = modified_at(path);
    if after.is_none() || after == before {
        bail!("Download failed, nothing was written to {}", path.display());
    }
    print_json(&serde_json::json!({ "saved": path.display().to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_session_path() {
        let path = default_session_path();
        assert!(path.ends_with(".certify/session.json") || path == PathBuf::from(SESSION_FALLBACK));
    }

    #[test]
    fn test_init_config_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("certify.toml");

        init_config(Some(&path)).unwrap();
        assert!(ConfigLoader::new(&path).load().is_ok());
        assert!(init_config(Some(&path)).is_err());
    }

    #[test]
    fn test_ensure_saved() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("certificate_1.pdf");

        let before = modified_at(&file);
        assert!(before.is_none());
        assert!(ensure_saved(&file, before).is_err());

        std::fs::write(&file, b"%PDF").unwrap();
        assert!(ensure_saved(&file, before).is_ok());

        // 已存在但未被改写的旧文件不算成功
        let stale = modified_at(&file);
        assert!(ensure_saved(&file, stale).is_err());
    }
}
