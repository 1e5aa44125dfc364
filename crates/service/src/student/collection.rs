use async_trait::async_trait;

use crate::errors::StoreError;
use crate::student::domain::{StudentId, StudentRecord};

/// Minimal document-collection capability the record store needs. Each call is
/// a single atomic operation on the backing store; every backend failure is
/// reported as [`StoreError::Unavailable`].
#[async_trait]
pub trait StudentCollection: Send + Sync {
    /// Persist a new document, returning the id it was stored under.
    async fn insert_one(&self, record: &StudentRecord) -> Result<StudentId, StoreError>;

    /// Every document, in store-native (creation) order.
    async fn find_all(&self) -> Result<Vec<StudentRecord>, StoreError>;

    async fn find_one_by_id(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError>;

    /// Documents whose first name OR last name contains `fragment`, ignoring case.
    async fn find_many_by_name_contains(&self, fragment: &str) -> Result<Vec<StudentRecord>, StoreError>;

    /// Number of documents removed (0 or 1).
    async fn delete_one_by_id(&self, id: StudentId) -> Result<u64, StoreError>;
}
