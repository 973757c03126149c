//! Custom error types for the common library
//!
//! This module defines the error type returned by the MongoDB connectivity
//! helpers shared by the services.

use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while establishing the database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] MongoError),

    /// Error occurred while executing a database command
    #[error("Database query error: {0}")]
    Query(#[source] MongoError),

    /// Error occurred while creating collection indexes
    #[error("Database index error: {0}")]
    Index(#[source] MongoError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
