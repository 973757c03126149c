//! In-memory user repository used by the service and route tests

use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use super::UserRepository;
use crate::{
    error::{UserError, UserResult},
    models::{UserChanges, UserRecord},
};

#[derive(Debug, Default)]
struct Store {
    records: HashMap<String, UserRecord>,
    order: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: UserRecord) -> UserResult<UserRecord> {
        let mut store = self.store.write().await;

        if store.records.contains_key(&record.email) {
            return Err(UserError::DuplicateEmail(record.email));
        }

        store.order.push(record.email.clone());
        store.records.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<UserRecord>> {
        Ok(self.store.read().await.records.get(email).cloned())
    }

    async fn update(&self, email: &str, changes: &UserChanges) -> UserResult<bool> {
        let mut store = self.store.write().await;
        match store.records.get_mut(email) {
            Some(record) => {
                changes.apply(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, email: &str) -> UserResult<bool> {
        let mut store = self.store.write().await;
        if store.records.remove(email).is_none() {
            return Ok(false);
        }
        store.order.retain(|existing| existing != email);
        Ok(true)
    }

    async fn list(&self) -> UserResult<Vec<UserRecord>> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|email| store.records.get(email).cloned())
            .collect())
    }
}
