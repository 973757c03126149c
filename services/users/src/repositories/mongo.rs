//! MongoDB user repository

use async_trait::async_trait;
use common::error::DatabaseError;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
};
use tracing::{info, instrument};

use super::UserRepository;
use crate::{
    error::{UserError, UserResult},
    models::{UserChanges, UserRecord},
};

/// Collection holding user records
pub const USERS_COLLECTION: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// User repository backed by a MongoDB collection
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserRecord>,
}

impl MongoUserRepository {
    /// Create a new user repository
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }

    /// Create the unique index on `email` that backs the uniqueness constraint
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(DatabaseError::Index)?;

        info!("Unique email index ensured on '{}'", USERS_COLLECTION);
        Ok(())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        &*error.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn query_error(error: MongoError) -> UserError {
    UserError::Database(DatabaseError::Query(error))
}

fn update_document(changes: &UserChanges) -> Document {
    let mut set = Document::new();
    if let Some(full_name) = &changes.full_name {
        set.insert("fullName", full_name.as_str());
    }
    if let Some(password_hash) = &changes.password_hash {
        set.insert("password", password_hash.as_str());
    }
    doc! { "$set": set }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, record), fields(email = %record.email))]
    async fn create(&self, record: UserRecord) -> UserResult<UserRecord> {
        match self.collection.insert_one(&record).await {
            Ok(_) => {
                info!(user_id = %record.id, "User record inserted");
                Ok(record)
            }
            Err(e) if is_duplicate_key(&e) => Err(UserError::DuplicateEmail(record.email)),
            Err(e) => Err(query_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> UserResult<Option<UserRecord>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(query_error)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, email: &str, changes: &UserChanges) -> UserResult<bool> {
        if changes.is_empty() {
            return Ok(self.find_by_email(email).await?.is_some());
        }

        let result = self
            .collection
            .update_one(doc! { "email": email }, update_document(changes))
            .await
            .map_err(query_error)?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, email: &str) -> UserResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "email": email })
            .await
            .map_err(query_error)?;

        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<UserRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(query_error)?;

        cursor.try_collect().await.map_err(query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::database::{DEFAULT_DATABASE_URL, DatabaseConfig, init_database};
    use mongodb::bson::oid::ObjectId;

    fn record(full_name: &str, email: &str, password_hash: &str) -> UserRecord {
        UserRecord::new(
            full_name.to_string(),
            email.to_string(),
            password_hash.to_string(),
        )
    }

    /// Runs against `DATABASE_URL` in a throwaway database:
    ///
    /// ```sh
    /// cargo test -p users -- --ignored
    /// ```
    #[tokio::test]
    #[ignore = "requires a running MongoDB instance"]
    async fn test_mongo_repository_round_trip() {
        let url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let name = format!("users_test_{}", ObjectId::new().to_hex());
        let database = init_database(&DatabaseConfig::new(url, name)).await.unwrap();

        let repository = MongoUserRepository::new(&database);
        repository.ensure_indexes().await.unwrap();
        // Creating the index twice is a no-op.
        repository.ensure_indexes().await.unwrap();

        let alice = record("Alice Smith", "alice@example.com", "$argon2id$alice");
        let bob = record("Bob Stone", "bob@example.com", "$argon2id$bob");
        repository.create(alice.clone()).await.unwrap();
        repository.create(bob.clone()).await.unwrap();

        let duplicate = record("Alice Jones", "alice@example.com", "$argon2id$other");
        let result = repository.create(duplicate).await;
        assert!(matches!(
            result,
            Err(UserError::DuplicateEmail(email)) if email == "alice@example.com"
        ));

        let rename = UserChanges {
            full_name: Some("Alice Jones".to_string()),
            password_hash: None,
        };
        assert!(repository.update("alice@example.com", &rename).await.unwrap());
        assert!(!repository.update("ghost@example.com", &rename).await.unwrap());

        let stored = repository
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.full_name, "Alice Jones");
        assert_eq!(stored.password_hash, "$argon2id$alice");

        let listed = repository.list().await.unwrap();
        let emails: Vec<&str> = listed.iter().map(|user| user.email.as_str()).collect();
        assert_eq!(emails, vec!["alice@example.com", "bob@example.com"]);
        assert_eq!(listed[0].id, alice.id);

        assert!(repository.delete("alice@example.com").await.unwrap());
        assert!(!repository.delete("alice@example.com").await.unwrap());
        assert!(
            repository
                .find_by_email("alice@example.com")
                .await
                .unwrap()
                .is_none()
        );

        database.drop().await.unwrap();
    }

    #[test]
    fn test_update_document_sets_only_present_fields() {
        let changes = UserChanges {
            full_name: Some("Alice Jones".to_string()),
            password_hash: None,
        };

        let update = update_document(&changes);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("fullName").unwrap(), "Alice Jones");
        assert!(!set.contains_key("password"));
    }

    #[test]
    fn test_update_document_maps_hash_to_password_field() {
        let changes = UserChanges {
            full_name: None,
            password_hash: Some("$argon2id$hash".to_string()),
        };

        let update = update_document(&changes);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("password").unwrap(), "$argon2id$hash");
        assert!(!set.contains_key("fullName"));
    }
}
