//! Common library for the user record services
//!
//! This crate provides shared functionality used across services, namely
//! MongoDB connectivity and the associated error type.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("mongodb://localhost:27017", "users");
//!     let database = init_database(&config).await?;
//!     let is_healthy = health_check(&database).await?;
//!     assert!(is_healthy);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
