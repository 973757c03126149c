//! Database module for handling MongoDB connections
//!
//! This module provides configuration, client initialisation and health checks
//! for the MongoDB document store. The driver pools connections internally, so
//! the returned [`Database`] handle is cheap to clone and meant to be opened
//! once at startup and shared.

use crate::error::{DatabaseError, DatabaseResult};
use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{error, info};

/// Default MongoDB connection string
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "users";

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection URL
    pub database_url: String,
    /// Name of the database holding the collections
    pub database_name: String,
    /// Maximum number of connections in the driver pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Create a configuration for the given URL and database name with default pool settings
    pub fn new(database_url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_name: database_name.into(),
            max_connections: 10,
            connection_timeout: 10,
        }
    }
}

/// Connect to MongoDB and select the configured database
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<Database>` - Handle to the configured database or error
pub async fn init_database(config: &DatabaseConfig) -> DatabaseResult<Database> {
    info!("Initializing MongoDB client");

    let mut options = ClientOptions::parse(&config.database_url)
        .await
        .map_err(|e| DatabaseError::Configuration(format!("Invalid database URL: {}", e)))?;

    options.max_pool_size = Some(config.max_connections);
    options.connect_timeout = Some(Duration::from_secs(config.connection_timeout));
    options.server_selection_timeout = Some(Duration::from_secs(config.connection_timeout));

    let client = Client::with_options(options).map_err(DatabaseError::Connection)?;

    info!(database = %config.database_name, "MongoDB client initialized successfully");
    Ok(client.database(&config.database_name))
}

/// Check database connectivity
///
/// # Arguments
///
/// * `database` - MongoDB database handle
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if the server answered the ping, false otherwise
pub async fn health_check(database: &Database) -> DatabaseResult<bool> {
    match database.run_command(doc! { "ping": 1 }).await {
        Ok(_) => {
            info!("Database health check successful");
            Ok(true)
        }
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}
