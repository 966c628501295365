//! Environment-indexed application settings. A profile is selected once at
//! startup (by name or from `APP_ENV`) and is read-only afterwards;
//! switching environments means re-selecting, not patching.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const APP_NAME: &str = "UI/UX Designer Portfolio";

/// Development fallback secret. Production refuses to start with it.
const DEV_SECRET_KEY: &str = "dev-secret-key-change-this-in-production-12345";

/// Retained rotated log files in production.
const LOG_BACKUP_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Reads the deployment environment from `APP_ENV`, defaulting to
    /// development when unset.
    pub fn detect() -> Self {
        env::var("APP_ENV")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Self::Development)
    }

    /// Unknown names (and the explicit "default") select development rather
    /// than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" => Self::Production,
            "testing" => Self::Testing,
            _ => Self::Development,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// The selected profile's constants. The mail, chatbot, database and upload
/// fields are recognized from the environment but enforced by no code path.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub secret_key: String,
    pub debug: bool,
    pub testing: bool,
    pub host: String,
    pub port: u16,
    pub session_cookie_secure: bool,
    pub csrf_enabled: bool,
    pub data_file: String,
    pub templates_folder: String,
    pub upload_folder: String,
    pub max_content_length: u64,
    pub log_level: String,
    pub log_file: String,
    pub mail_server: String,
    pub mail_port: u16,
    pub mail_username: Option<String>,
    pub mail_password: Option<String>,
    pub flowise_chatbot_url: String,
    pub flowise_api_key: String,
    pub database_url: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, AppError> {
        Self::for_environment(Environment::detect())
    }

    /// Builds the profile's defaults, overlays process environment variables
    /// and validates what the profile requires.
    pub fn for_environment(environment: Environment) -> Result<Self, AppError> {
        let data_file = if environment.is_testing() {
            "tests/test_portfolio_data.json"
        } else {
            "data/portfolio_data.json"
        };
        let log_level = if environment.is_production() {
            "warn"
        } else {
            "debug"
        };

        let raw = config::Config::builder()
            .set_default("secret_key", DEV_SECRET_KEY)?
            .set_default("debug", !environment.is_production())?
            .set_default("testing", environment.is_testing())?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("session_cookie_secure", environment.is_production())?
            .set_default("csrf_enabled", !environment.is_testing())?
            .set_default("data_file", data_file)?
            .set_default("templates_folder", "templates")?
            .set_default("upload_folder", "static/uploads")?
            .set_default("max_content_length", 16 * 1024 * 1024)?
            .set_default("log_level", log_level)?
            .set_default("log_file", "logs/portfolio.log")?
            .set_default("mail_server", "smtp.gmail.com")?
            .set_default("mail_port", 587)?
            .set_default("flowise_chatbot_url", "")?
            .set_default("flowise_api_key", "")?
            .add_source(config::Environment::default())
            .build()?;

        let mut settings: Settings = raw.try_deserialize()?;
        settings.environment = environment;

        // The one genuine validation rule: never start production on the
        // hard-coded development secret.
        if environment.is_production()
            && (settings.secret_key.is_empty() || settings.secret_key == DEV_SECRET_KEY)
        {
            return Err(AppError::Config(
                "SECRET_KEY environment variable must be set in production".into(),
            ));
        }

        Ok(settings)
    }

    /// Installs the global tracing subscriber. Production attaches a rotating
    /// file appender under the configured log path and returns its writer
    /// guard; other profiles log to stderr. `RUST_LOG` overrides the
    /// profile's `log_level`.
    pub fn init_logging(&self) -> Result<Option<WorkerGuard>, AppError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.clone()));

        if !self.environment.is_production() {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            return Ok(None);
        }

        let log_path = Path::new(&self.log_file);
        let log_dir = match log_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("logs"),
        };
        fs::create_dir_all(log_dir).map_err(|e| AppError::Io(e.to_string()))?;

        let prefix = log_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("portfolio");
        let suffix = log_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("log");
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(prefix)
            .filename_suffix(suffix)
            .max_log_files(LOG_BACKUP_COUNT)
            .build(log_dir)
            .map_err(|e| AppError::Io(e.to_string()))?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        info!("portfolio application startup");
        Ok(Some(guard))
    }
}
