mod commands;
mod indicator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Certify 证书平台命令行客户端
#[derive(Parser, Debug)]
#[command(name = "certify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "certify.toml")]
    pub config: PathBuf,

    /// Session file path (defaults to ~/.certify/session.json)
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[command(subcommand)]
        command: LoginCommands,
    },

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Status,

    /// Course management
    Courses {
        #[command(subcommand)]
        command: CourseCommands,
    },

    /// Class management
    Classes {
        #[command(subcommand)]
        command: ClassCommands,
    },

    /// Certificate lookup and download
    Certificates {
        #[command(subcommand)]
        command: CertificateCommands,
    },

    /// Validate a certificate by its UUID
    Validate {
        uuid: String,
    },

    /// Write a default configuration file
    InitConfig {
        /// Output path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LoginCommands {
    /// Administrator login
    Admin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Student login
    Student {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// List all courses
    List {
        /// Include class summaries
        #[arg(long)]
        with_classes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// List the students enrolled in a class
    Students {
        class_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CertificateCommands {
    /// Download a single certificate as PDF
    Download {
        id: i64,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Download all certificates of a class as a ZIP archive
    Bulk {
        class_id: i64,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// List the certificates issued to a CPF
    ByCpf {
        cpf: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,certify=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(config = ?cli.config, "Starting certify");

    commands::run(cli).await
}
