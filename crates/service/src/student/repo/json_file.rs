use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::StoreError;
use crate::storage::json_map_store::JsonMapStore;
use crate::student::{
    collection::StudentCollection,
    domain::{StudentId, StudentRecord},
};

/// Student documents persisted in a single JSON file, keyed (and therefore
/// ordered) by id.
#[derive(Clone)]
pub struct JsonFileStudentCollection {
    store: Arc<JsonMapStore<StudentId, StudentRecord>>,
}

impl JsonFileStudentCollection {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        debug!(path = %path.display(), "opening json student collection");
        let store = JsonMapStore::new(path).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl StudentCollection for JsonFileStudentCollection {
    async fn insert_one(&self, record: &StudentRecord) -> Result<StudentId, StoreError> {
        if !self.store.insert_new(record.id, record.clone()).await? {
            return Err(StoreError::Unavailable(format!("duplicate student id {}", record.id)));
        }
        Ok(record.id)
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(self.store.values().await)
    }

    async fn find_one_by_id(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError> {
        Ok(self.store.get(&id).await)
    }

    async fn find_many_by_name_contains(&self, fragment: &str) -> Result<Vec<StudentRecord>, StoreError> {
        let needle = fragment.to_lowercase();
        Ok(self.store.filter_values(|r| r.name_contains(&needle)).await)
    }

    async fn delete_one_by_id(&self, id: StudentId) -> Result<u64, StoreError> {
        Ok(u64::from(self.store.remove(&id).await?))
    }
}
