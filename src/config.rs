// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

use crate::application::browse::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    articles_path: PathBuf,
    page_size: usize,
    store_ready_timeout: Duration,
    site_name: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_articles_path() -> PathBuf {
    PathBuf::from("data/articles.json")
}

fn default_store_ready_timeout_ms() -> u64 {
    5000
}

fn default_site_name() -> String {
    "EverydayHaven".into()
}

fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {value}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::Invalid(format!("{key} is not valid unicode")))
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let articles_path = env::var("ARTICLES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_articles_path());

        let page_size = parse_var::<usize>("PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::Invalid("PAGE_SIZE must be at least 1".into()));
        }

        let ready_ms = parse_var::<u64>("STORE_READY_TIMEOUT_MS")?
            .unwrap_or_else(default_store_ready_timeout_ms);

        let site_name = env::var("SITE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(default_site_name);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            articles_path,
            page_size,
            store_ready_timeout: Duration::from_millis(ready_ms),
            site_name,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn articles_path(&self) -> &PathBuf {
        &self.articles_path
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn store_ready_timeout(&self) -> Duration {
        self.store_ready_timeout
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
