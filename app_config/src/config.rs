use crate::log_level_wrapper::*;
use crate::rolling_appender_rotation::*;
use lazy_static::lazy_static;
use schematic::{Config, ConfigLoader};
use std::path::{Path, PathBuf};

const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
const DEFAULT_CONFIG_FILEPATH: &str = "./config/config.yml";

lazy_static! {
  pub static ref APP_CONFIG: AppConfig = AppConfig::new().unwrap();
}

#[derive(Debug, Config, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
  log_level: Option<LoggingConfigLevel>,
  logging_dir: Option<PathBuf>,
  #[setting(default = "")]
  logging_filename_prefix: String,
  #[setting(default = "daily")]
  logging_roll_appender: RollingAppenderRotation,

  /// The file backing the platform database. The parent directory is created
  /// on first connect.
  #[setting(default = "./data/event_platform.sqlite3", env = "DATABASE_PATH")]
  database_path: String,

  /// Endpoint the smoke-test client subscribes against.
  #[setting(default = "ws://127.0.0.1:8000/ws/events/")]
  websocket_url: String,

  /// Findings file produced by the platform's security scanner.
  #[setting(default = "./reports/security_report.json")]
  security_report_path: String,
}

impl AppConfig {
  fn new() -> anyhow::Result<Self> {
    let config = ConfigLoader::<AppConfig>::new()
      .file_optional(get_config_path())
      .unwrap()
      .load()?
      .config;

    Ok(config)
  }

  pub fn log_level(&self) -> Option<&LoggingConfigLevel> {
    self.log_level.as_ref()
  }

  pub fn logging_dir(&self) -> Option<&PathBuf> {
    self.logging_dir.as_ref()
  }

  pub fn logging_filename_prefix(&self) -> &str {
    &self.logging_filename_prefix
  }

  pub fn logging_file_roll_appender(&self) -> &RollingAppenderRotation {
    &self.logging_roll_appender
  }

  pub fn database_path(&self) -> &Path {
    Path::new(&self.database_path)
  }

  pub fn websocket_url(&self) -> &str {
    &self.websocket_url
  }

  pub fn security_report_path(&self) -> &Path {
    Path::new(&self.security_report_path)
  }
}

fn get_config_path() -> PathBuf {
  let Some((_, config_path)) = std::env::vars().find(|(key, _)| key == CONFIG_PATH_ENV_VAR) else {
    return PathBuf::from(DEFAULT_CONFIG_FILEPATH);
  };

  PathBuf::from(config_path)
}
