use std::{env::var, time::Duration};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("env var {name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_schema: Option<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// 讀 `.env` 之後再從環境變數組出設定
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenvy::dotenv().ok();

        Config::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let db_schema = match lookup("DB_SCHEMA").filter(|s| !s.is_empty()) {
            Some(schema) if is_identifier(&schema) => Some(schema),
            Some(schema) => {
                return Err(ConfigError::Invalid {
                    name: "DB_SCHEMA",
                    value: schema,
                })
            }
            None => None,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "APP_PORT", 3000)?,
            database_url,
            db_schema,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                3,
            )?),
            cors_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 查詢時用的表名, 有 schema 就帶上
    pub fn users_table(&self) -> String {
        match &self.db_schema {
            Some(schema) => format!("{}.users", schema),
            None => "users".to_string(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

// schema 名稱直接拼進 SQL, 只允許單純的識別字
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
