use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::errors::StoreError;
use crate::student::{
    collection::StudentCollection,
    domain::{NewStudentInput, StudentId, StudentRecord},
};

/// Source of the creation date stamped on new records.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Server-local calendar date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// CRUD and name search over student records.
///
/// Stateless between calls: every operation is one request against the
/// injected collection. The store alone mints ids and creation dates.
#[derive(Clone)]
pub struct StudentStore {
    collection: Arc<dyn StudentCollection>,
    clock: Arc<dyn Clock>,
}

impl StudentStore {
    pub fn new(collection: Arc<dyn StudentCollection>) -> Self {
        Self::with_clock(collection, Arc::new(SystemClock))
    }

    pub fn with_clock(collection: Arc<dyn StudentCollection>, clock: Arc<dyn Clock>) -> Self {
        Self { collection, clock }
    }

    /// Validate `input`, assign an id and today's date, persist.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewStudentInput) -> Result<StudentRecord, StoreError> {
        let candidate = input.validate().inspect_err(|e| warn!(error = %e, "create rejected"))?;
        let record = candidate.into_record(StudentId::generate(), self.clock.today());
        let stored_as = self.collection.insert_one(&record).await?;
        info!(event = "student_created", id = %stored_as, created_date = %record.created_date, "student created");
        Ok(record)
    }

    /// Every record; an empty store yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let all = self.collection.find_all().await?;
        info!(count = all.len(), "listed students");
        Ok(all)
    }

    /// Ids that do not parse are reported exactly like absent ones.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, raw_id: &str) -> Result<StudentRecord, StoreError> {
        let id = StudentId::parse(raw_id).ok_or_else(StoreError::student_not_found)?;
        self.collection
            .find_one_by_id(id)
            .await?
            .ok_or_else(StoreError::student_not_found)
    }

    /// Hard delete. Returns the removed id.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, raw_id: &str) -> Result<StudentId, StoreError> {
        let id = StudentId::parse(raw_id).ok_or_else(StoreError::student_not_found)?;
        match self.collection.delete_one_by_id(id).await? {
            0 => Err(StoreError::student_not_found()),
            _ => {
                info!(event = "student_deleted", %id, "student deleted");
                Ok(id)
            }
        }
    }

    /// Case-insensitive substring match on first name OR last name.
    ///
    /// Unlike [`get_all`](Self::get_all), zero matches is an error
    /// ([`StoreError::NotFound`]) rather than an empty list.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<StudentRecord>, StoreError> {
        if fragment.is_empty() {
            return Err(StoreError::Validation("name fragment must not be empty".into()));
        }
        let hits = self.collection.find_many_by_name_contains(fragment).await?;
        if hits.is_empty() {
            return Err(StoreError::no_name_matches());
        }
        info!(count = hits.len(), "name search matched");
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::repo::JsonFileStudentCollection;
    use async_trait::async_trait;
    use std::collections::HashSet;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    struct DownCollection;

    #[async_trait]
    impl StudentCollection for DownCollection {
        async fn insert_one(&self, _: &StudentRecord) -> Result<StudentId, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
        async fn find_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
        async fn find_one_by_id(&self, _: StudentId) -> Result<Option<StudentRecord>, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
        async fn find_many_by_name_contains(&self, _: &str) -> Result<Vec<StudentRecord>, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
        async fn delete_one_by_id(&self, _: StudentId) -> Result<u64, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
    }

    async fn store() -> (StudentStore, std::path::PathBuf) {
        let path = std::env::temp_dir().join(format!("student_store_{}.json", uuid::Uuid::new_v4()));
        let collection = JsonFileStudentCollection::open(&path).await.expect("open collection");
        (StudentStore::with_clock(Arc::new(collection), Arc::new(FixedClock(today()))), path)
    }

    fn input(first: &str, last: &str) -> NewStudentInput {
        NewStudentInput {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            date_of_birth: Some("2000-01-01".into()),
            class_name: Some("10".into()),
            session: Some("2023-2024".into()),
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_and_creation_date() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let mut seen = HashSet::new();
        for i in 0..20 {
            let rec = store.create(input(&format!("S{i}"), "Student")).await?;
            assert_eq!(rec.created_date, today());
            assert!(seen.insert(rec.id), "duplicate id {}", rec.id);
        }
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_with_missing_field_is_validation_error() {
        let (store, path) = store().await;
        let only_first = NewStudentInput { first_name: Some("Eve".into()), ..Default::default() };
        assert!(matches!(store.create(only_first).await, Err(StoreError::Validation(_))));
        assert!(store.get_all().await.expect("list").is_empty());
        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn get_by_id_returns_created_record() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let created = store.create(input("Alice", "Smith")).await?;
        assert_eq!(store.get_by_id(&created.id.to_string()).await?, created);
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_and_unknown_ids_are_not_found() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let unused = StudentId::generate().to_string();
        assert_eq!(store.get_by_id("garbage").await, Err(StoreError::student_not_found()));
        assert_eq!(store.get_by_id(&unused).await, Err(StoreError::student_not_found()));
        assert_eq!(store.delete_by_id("garbage").await, Err(StoreError::student_not_found()));
        assert_eq!(store.delete_by_id(&unused).await, Err(StoreError::student_not_found()));
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_permanent() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let created = store.create(input("Charlie", "Brown")).await?;
        let id = created.id.to_string();
        assert_eq!(store.delete_by_id(&id).await?, created.id);
        assert_eq!(store.get_by_id(&id).await, Err(StoreError::student_not_found()));
        assert_eq!(store.delete_by_id(&id).await, Err(StoreError::student_not_found()));
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_either_name_case_insensitively() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let alice = store.create(input("Alice", "Smith")).await?;
        let bob = store.create(input("Bob", "Alicia")).await?;
        let carol = store.create(input("Carol", "Jones")).await?;

        let hits = store.search_by_name("ali").await?;
        let ids: HashSet<StudentId> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, HashSet::from([alice.id, bob.id]));
        assert!(!ids.contains(&carol.id));

        assert_eq!(store.search_by_name("SMITH").await?, vec![alice]);
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn search_does_not_match_across_first_and_last_name() -> Result<(), StoreError> {
        let (store, path) = store().await;
        store.create(input("Alice", "Smith")).await?;
        assert_eq!(store.search_by_name("ce Sm").await, Err(StoreError::no_name_matches()));
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn empty_store_lists_empty_but_search_is_not_found() -> Result<(), StoreError> {
        let (store, path) = store().await;
        assert!(store.get_all().await?.is_empty());
        assert_eq!(store.search_by_name("NonExistentName").await, Err(StoreError::no_name_matches()));
        assert!(matches!(store.search_by_name("").await, Err(StoreError::Validation(_))));
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_then_list_round_trip() -> Result<(), StoreError> {
        let (store, path) = store().await;
        let created = store.create(input("Test", "User")).await?;
        assert_eq!(store.get_all().await?, vec![created]);
        let _ = tokio::fs::remove_file(path).await;
        Ok(())
    }

    #[tokio::test]
    async fn backend_failures_propagate_as_unavailable() {
        let store = StudentStore::new(Arc::new(DownCollection));
        let id = StudentId::generate().to_string();
        assert!(matches!(store.create(input("A", "B")).await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.get_all().await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.get_by_id(&id).await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.delete_by_id(&id).await, Err(StoreError::Unavailable(_))));
        assert!(matches!(store.search_by_name("a").await, Err(StoreError::Unavailable(_))));
        // validation still happens before the backend is touched
        assert!(matches!(store.create(NewStudentInput::default()).await, Err(StoreError::Validation(_))));
    }
}
