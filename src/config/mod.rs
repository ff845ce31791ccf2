use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_offset;
use crate::utils::path::expand_tilde;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Application namespace of the generated route names (`app:Model:op`).
    #[serde(default = "default_app_namespace")]
    pub app_namespace: String,
    /// URL prefix of the event routes.
    #[serde(default = "default_event_prefix")]
    pub event_prefix: String,
    /// Offset of the local clock, used to place events on calendar days.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_app_namespace() -> String {
    "calendar".to_string()
}
fn default_event_prefix() -> String {
    "/calendar/event/".to_string()
}
fn default_utc_offset() -> String {
    "+00:00".to_string()
}
fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            app_namespace: default_app_namespace(),
            event_prefix: default_event_prefix(),
            utc_offset: default_utc_offset(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Config {
    /// `~/.calevent`, or `./.calevent` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".calevent")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("calevent.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("calevent.sqlite")
    }

    /// Load the configuration file, or the defaults if there is none.
    /// Missing keys take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.utc_offset)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the configuration directory, the configuration file (unless
    /// `is_test`) and an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
