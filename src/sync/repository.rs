//! Backing store contract.

use std::fmt::Debug;
use std::hash::Hash;

use async_trait::async_trait;

/// Authoritative CRUD store for one entity kind.
///
/// Every operation may fail; the error type is the store's own.
#[async_trait]
pub trait Repository: Send + Sync {
    type Key: Eq + Hash + Clone + Debug + Send + Sync + 'static;
    type Value: Clone + Send + Sync + 'static;
    type NewValue: Send + 'static;
    type Patch: Send + 'static;
    type Error: Send + 'static;

    /// Reads the key the store assigned to a saved value.
    fn key_of(value: &Self::Value) -> Self::Key;

    async fn find_by_id(&self, key: &Self::Key) -> Result<Self::Value, Self::Error>;

    /// Persists a new value and returns it with its assigned key.
    async fn save(&self, new_value: Self::NewValue) -> Result<Self::Value, Self::Error>;

    async fn update(&self, key: &Self::Key, patch: Self::Patch)
        -> Result<Self::Value, Self::Error>;

    /// Fails if `key` is absent.
    async fn delete_by_id(&self, key: &Self::Key) -> Result<(), Self::Error>;
}
