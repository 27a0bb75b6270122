use std::env;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::{AppError, AppResult};

/// e.g. `2024年3月5日 19:30`, the format the mobile app writes.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y年%-m月%-d日 %H:%M";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub storage_scope: String,

    // Heatmap / summary calendar alignment
    pub week_start: Weekday,

    // Mood journal
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://courtlog.db".into(),
            max_connections: 5,
            storage_scope: "default".into(),
            week_start: Weekday::Sun,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or empty
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_connections = match var("COURTLOG_MAX_CONNECTIONS") {
            Some(raw) => parse_var::<u32>("COURTLOG_MAX_CONNECTIONS", &raw)?,
            None => defaults.max_connections,
        };
        if max_connections == 0 {
            return Err(AppError::Config(
                "COURTLOG_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let week_start = match var("COURTLOG_WEEK_START") {
            Some(raw) => parse_var::<Weekday>("COURTLOG_WEEK_START", &raw)?,
            None => defaults.week_start,
        };

        Ok(Self {
            database_url: var("COURTLOG_DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections,
            storage_scope: var("COURTLOG_STORAGE_SCOPE").unwrap_or(defaults.storage_scope),
            week_start,
            timestamp_format: var("COURTLOG_TIMESTAMP_FORMAT")
                .unwrap_or(defaults.timestamp_format),
        })
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{key} has an invalid value: {raw:?}")))
}
