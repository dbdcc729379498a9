/// Server configuration
use crate::error::{Result, ServerError};
use learntube_search::{SearchConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest page size the YouTube search endpoint accepts
pub const MAX_SEARCH_RESULTS: u8 = 50;

/// Upper bound for access token lifetime (one year)
pub const MAX_JWT_EXPIRATION_HOURS: u64 = 24 * 365;

/// Upper bound for refresh token lifetime (ten years)
pub const MAX_JWT_REFRESH_EXPIRATION_DAYS: u64 = 365 * 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_youtube")]
    pub youtube: YouTubeSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,

    #[serde(default = "default_jwt_refresh_expiration_days")]
    pub jwt_refresh_expiration_days: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YouTubeSettings {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,

    #[serde(default = "default_max_results")]
    pub max_results: u8,
}

impl YouTubeSettings {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            max_results: self.max_results,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the given file (or `config.toml`) and environment
    ///
    /// Environment variables use the `LEARNTUBE_` prefix with `__` between
    /// nested keys, e.g. `LEARNTUBE_AUTH__JWT_SECRET`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("LEARNTUBE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set LEARNTUBE_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&self.auth.jwt_expiration_hours) {
            return Err(ServerError::Config(format!(
                "auth.jwt_expiration_hours must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }

        if !(1..=MAX_JWT_REFRESH_EXPIRATION_DAYS).contains(&self.auth.jwt_refresh_expiration_days) {
            return Err(ServerError::Config(format!(
                "auth.jwt_refresh_expiration_days must be between 1 and {}",
                MAX_JWT_REFRESH_EXPIRATION_DAYS
            )));
        }

        if !(1..=MAX_SEARCH_RESULTS).contains(&self.youtube.max_results) {
            return Err(ServerError::Config(format!(
                "youtube.max_results must be between 1 and {}",
                MAX_SEARCH_RESULTS
            )));
        }

        if self.youtube.api_key.as_deref().map_or(true, str::is_empty) {
            tracing::warn!("No YouTube API key configured; video search will be unavailable");
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/learntube.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
        jwt_refresh_expiration_days: default_jwt_refresh_expiration_days(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

fn default_jwt_refresh_expiration_days() -> u64 {
    30
}

fn default_youtube() -> YouTubeSettings {
    YouTubeSettings {
        api_key: None,
        base_url: default_youtube_base_url(),
        max_results: default_max_results(),
    }
}

fn default_youtube_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_results() -> u8 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            youtube: default_youtube(),
        }
    }
}
