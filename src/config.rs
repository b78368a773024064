// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub table_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub session_cookie: String,
    /// Sessions kept in memory; the least recently used is dropped first
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            session_cookie: "ai_directory_session".to_string(),
            max_sessions: 10_000,
        }
    }
}

/// Page size used for the first search of a session and the increment
/// applied by each "show more" action.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaginationConfig {
    pub initial_limit: usize,
    pub step: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_limit: 5,
            step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    pub site_name: String,
    pub tagline: String,
    pub placeholder: String,
    pub website_scheme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: "2456.ai".to_string(),
            tagline: "AI Directory Search Engine".to_string(),
            placeholder: "AI tool".to_string(),
            website_scheme: "https://".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("AI_DIRECTORY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            database: DatabaseConfig {
                uri: "./lancedb".to_string(),
                table_name: "wpai_7500_tools".to_string(),
            },
            server: ServerConfig::default(),
            pagination: PaginationConfig::default(),
            ui: UiConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pagination.initial_limit == 0 {
            return Err(SearchError::Config(
                "initial_limit must be greater than 0".to_string(),
            ));
        }

        if self.pagination.step == 0 {
            return Err(SearchError::Config(
                "step must be greater than 0".to_string(),
            ));
        }

        if self.database.table_name.trim().is_empty() {
            return Err(SearchError::Config(
                "table_name must not be empty".to_string(),
            ));
        }

        if self.server.session_cookie.trim().is_empty() {
            return Err(SearchError::Config(
                "session_cookie must not be empty".to_string(),
            ));
        }

        if self.server.max_sessions == 0 {
            return Err(SearchError::Config(
                "max_sessions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
