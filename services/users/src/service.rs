//! User record service: validation, hashing and persistence

use std::sync::Arc;
use tracing::info;

use crate::{
    error::{UserError, UserResult},
    models::{NewUser, UpdateUser, UserChanges, UserRecord, UserSummary},
    password::hash_password_blocking,
    repositories::UserRepository,
    validation::{ValidationProfile, validate_email, validate_full_name, validate_password},
};

/// Service layer for user records
///
/// Every plaintext password goes through exactly one hash before it reaches
/// the repository.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    profile: ValidationProfile,
    include_password_hash: bool,
}

impl UserService {
    /// Create a new user service over the given repository
    pub fn new(
        repository: Arc<dyn UserRepository>,
        profile: ValidationProfile,
        include_password_hash: bool,
    ) -> Self {
        Self {
            repository,
            profile,
            include_password_hash,
        }
    }

    /// Validate, hash and persist a new user, returning its record id
    pub async fn create_user(&self, input: NewUser) -> UserResult<String> {
        validate_full_name(&input.full_name, self.profile).map_err(UserError::Validation)?;
        validate_email(&input.email).map_err(UserError::Validation)?;
        validate_password(&input.password, self.profile).map_err(UserError::Validation)?;

        let password_hash = hash_password_blocking(input.password).await?;
        let record = UserRecord::new(input.full_name, input.email, password_hash);

        let created = self.repository.create(record).await?;

        info!(user_id = %created.id, email = %created.email, "Created user");
        Ok(created.id.to_hex())
    }

    /// Update the full name and/or password of the user with this email
    pub async fn update_user(&self, email: &str, input: UpdateUser) -> UserResult<()> {
        validate_email(email).map_err(UserError::Validation)?;
        self.validate_update(&input)?;

        if self.repository.find_by_email(email).await?.is_none() {
            return Err(UserError::NotFound(email.to_string()));
        }

        let password_hash = match input.password {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        let changes = UserChanges {
            full_name: input.full_name,
            password_hash,
        };

        // The record may have been deleted between lookup and write.
        if !self.repository.update(email, &changes).await? {
            return Err(UserError::NotFound(email.to_string()));
        }

        info!(
            email = %email,
            full_name_changed = changes.full_name.is_some(),
            password_changed = changes.password_hash.is_some(),
            "Updated user"
        );
        Ok(())
    }

    /// Delete the user with this email
    pub async fn delete_user(&self, email: &str) -> UserResult<()> {
        validate_email(email).map_err(UserError::Validation)?;

        if !self.repository.delete(email).await? {
            return Err(UserError::NotFound(email.to_string()));
        }

        info!(email = %email, "Deleted user");
        Ok(())
    }

    /// List every user record
    pub async fn list_users(&self) -> UserResult<Vec<UserSummary>> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .map(|record| UserSummary::from_record(record, self.include_password_hash))
            .collect())
    }

    fn validate_update(&self, input: &UpdateUser) -> UserResult<()> {
        if self.profile.allows_partial_update() {
            if input.full_name.is_none() && input.password.is_none() {
                return Err(UserError::Validation(
                    "Full name or password is required".to_string(),
                ));
            }
        } else if input.full_name.is_none() || input.password.is_none() {
            return Err(UserError::Validation(
                "Full name and password are required".to_string(),
            ));
        }

        if let Some(full_name) = &input.full_name {
            validate_full_name(full_name, self.profile).map_err(UserError::Validation)?;
        }
        if let Some(password) = &input.password {
            validate_password(password, self.profile).map_err(UserError::Validation)?;
        }

        Ok(())
    }
}
