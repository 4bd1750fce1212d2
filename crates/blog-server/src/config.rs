//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::routes::docs::DEFAULT_DOCS_ASSET_URL;

/// Which post store the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL, configured by `blog_store::StoreConfig`.
    Postgres,
    /// Process memory; contents are lost on exit.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                name: "STORE_BACKEND".to_string(),
                reason: format!("expected `postgres` or `memory`, got `{}`", other),
            }),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Directory uploaded files are written to.
    pub upload_dir: PathBuf,
    /// Directory served under `static_prefix`.
    pub static_dir: PathBuf,
    /// URL prefix for static files.
    pub static_prefix: String,
    /// Post store backend.
    pub store_backend: StoreBackend,
    /// Base URL the Swagger UI page loads its assets from.
    pub docs_asset_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4766,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            cors_allowed_origins: "*".to_string(),
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from("public"),
            static_prefix: "/static".to_string(),
            store_backend: StoreBackend::Postgres,
            docs_asset_url: DEFAULT_DOCS_ASSET_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 4766)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "text" or "json" (default: "text")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `UPLOAD_DIR`: Upload destination (default: "uploads")
    /// - `STATIC_DIR`: Static asset directory (default: "public")
    /// - `STATIC_PREFIX`: URL prefix for static assets (default: "/static")
    /// - `STORE_BACKEND`: "postgres" or "memory" (default: "postgres")
    /// - `DOCS_ASSET_URL`: Swagger UI asset base, e.g. a path under
    ///   `STATIC_PREFIX` for offline use (default: the unpkg CDN)
    ///
    /// Database settings are read separately by `blog_store::StoreConfig`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("`{}` is not a valid port", s),
            })?,
            Err(_) => defaults.port,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let static_prefix = env::var("STATIC_PREFIX").unwrap_or(defaults.static_prefix);
        if !static_prefix.starts_with('/') || static_prefix.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "STATIC_PREFIX".to_string(),
                reason: "must start with `/` and not end with `/`".to_string(),
            });
        }

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(s) => s.parse()?,
            Err(_) => defaults.store_backend,
        };

        let docs_asset_url = env::var("DOCS_ASSET_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.docs_asset_url);

        Ok(Self {
            port,
            log_level,
            log_format,
            cors_allowed_origins,
            upload_dir,
            static_dir,
            static_prefix,
            store_backend,
            docs_asset_url,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 4766);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.static_prefix, "/static");
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.docs_asset_url, "https://unpkg.com/swagger-ui-dist@5");
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("Postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert!("mongo".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().port(), 8080);
    }
}
