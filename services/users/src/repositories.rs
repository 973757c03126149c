//! Repositories for user record persistence

use async_trait::async_trait;

use crate::{
    error::UserResult,
    models::{UserChanges, UserRecord},
};

#[cfg(test)]
pub mod memory;
pub mod mongo;

pub use mongo::MongoUserRepository;

/// Storage operations on user records, keyed by email
///
/// Implementations enforce email uniqueness atomically and report a clash as
/// `UserError::DuplicateEmail`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record
    async fn create(&self, record: UserRecord) -> UserResult<UserRecord>;

    /// Find a record by email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<UserRecord>>;

    /// Apply changes to the record with this email, returning whether one matched
    async fn update(&self, email: &str, changes: &UserChanges) -> UserResult<bool>;

    /// Remove the record with this email, returning whether one was removed
    async fn delete(&self, email: &str) -> UserResult<bool>;

    /// All records in insertion order
    async fn list(&self) -> UserResult<Vec<UserRecord>>;
}
