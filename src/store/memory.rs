//! In-memory repository.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::sync::Repository;

// == Record ==
/// An entity kind a [`MemoryRepository`] can hold.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in not-found errors
    const ENTITY: &'static str;
    /// Body accepted on creation
    type New: Send + 'static;
    /// Partial update
    type Patch: Send + 'static;

    fn create(id: u64, new: Self::New, now: DateTime<Utc>) -> Self;
    fn apply(&mut self, patch: Self::Patch);
    fn id(&self) -> u64;
}

// == Memory Repository ==
/// Rows keyed by id, with ids assigned from 1 upward and never reused.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    rows: RwLock<HashMap<u64, T>>,
    last_id: AtomicU64,
}

impl<T: Record> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            last_id: AtomicU64::new(0),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Returns every row matching `predicate`, ordered by id.
    pub async fn find_all<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        let mut found: Vec<T> = rows.values().filter(|row| predicate(row)).cloned().collect();
        found.sort_by_key(|row| row.id());
        found
    }

    fn not_found(id: u64) -> ServiceError {
        ServiceError::not_found(T::ENTITY, id)
    }
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository for MemoryRepository<T> {
    type Key = u64;
    type Value = T;
    type NewValue = T::New;
    type Patch = T::Patch;
    type Error = ServiceError;

    fn key_of(value: &T) -> u64 {
        value.id()
    }

    async fn find_by_id(&self, id: &u64) -> Result<T, ServiceError> {
        self.rows
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(*id))
    }

    async fn save(&self, new_value: T::New) -> Result<T, ServiceError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = T::create(id, new_value, Utc::now());
        self.rows.write().await.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: &u64, patch: T::Patch) -> Result<T, ServiceError> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(id).ok_or_else(|| Self::not_found(*id))?;
        row.apply(patch);
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: &u64) -> Result<(), ServiceError> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(*id))
    }
}
