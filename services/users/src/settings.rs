//! Service configuration loaded from the environment

use common::database::{DEFAULT_DATABASE_NAME, DEFAULT_DATABASE_URL, DatabaseConfig};
use serde::Deserialize;

use crate::validation::ValidationProfile;

/// Service settings
///
/// # Environment Variables
/// - `HOST`: listen address (default: `0.0.0.0`)
/// - `PORT`: listen port (default: 3000)
/// - `DATABASE_URL`: MongoDB connection URL (default: `mongodb://localhost:27017`)
/// - `DATABASE_NAME`: database name (default: `users`)
/// - `DATABASE_MAX_CONNECTIONS`: driver pool size (default: 10)
/// - `DATABASE_CONNECTION_TIMEOUT`: connect and server selection timeout in seconds (default: 10)
/// - `VALIDATION_PROFILE`: `strict` or `lenient` (default: `strict`)
/// - `LIST_INCLUDE_PASSWORD_HASH`: include hashes when listing users (default: true)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub database_max_connections: u32,
    pub database_connection_timeout: u64,
    pub validation_profile: ValidationProfile,
    pub list_include_password_hash: bool,
}

impl Settings {
    /// Load settings from defaults overlaid with environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("database_name", DEFAULT_DATABASE_NAME)?
            .set_default("database_max_connections", 10)?
            .set_default("database_connection_timeout", 10)?
            .set_default("validation_profile", "strict")?
            .set_default("list_include_password_hash", true)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Database connection settings for the shared client
    pub fn database_config(&self) -> DatabaseConfig {
        let mut config = DatabaseConfig::new(&self.database_url, &self.database_name);
        config.max_connections = self.database_max_connections;
        config.connection_timeout = self.database_connection_timeout;
        config
    }
}
