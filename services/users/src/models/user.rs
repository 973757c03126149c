//! User model and related functionality

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Persisted user document
///
/// `password_hash` is stored under the `password` key and always holds a PHC
/// hash string, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl UserRecord {
    /// Build a record with a freshly generated identifier
    pub fn new(full_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            full_name,
            email,
            password_hash,
        }
    }
}

/// New user creation payload, password in plaintext
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// User update payload, password in plaintext
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub password: Option<String>,
}

/// Field changes handed to the repository once validated and hashed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.password_hash.is_none()
    }

    /// Apply the changes to a record in place
    pub fn apply(&self, record: &mut UserRecord) {
        if let Some(full_name) = &self.full_name {
            record.full_name = full_name.clone();
        }
        if let Some(password_hash) = &self.password_hash {
            record.password_hash = password_hash.clone();
        }
    }
}

/// Listing entry returned by the list operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserSummary {
    pub fn from_record(record: UserRecord, include_password_hash: bool) -> Self {
        Self {
            full_name: record.full_name,
            email: record.email,
            password: include_password_hash.then_some(record.password_hash),
        }
    }
}
