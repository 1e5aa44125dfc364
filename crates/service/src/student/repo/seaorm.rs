use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::StoreError;
use crate::student::{
    collection::StudentCollection,
    domain::{StudentId, StudentRecord},
};
use models::student;

/// SeaORM-backed (Postgres) student collection.
#[derive(Clone)]
pub struct SeaOrmStudentCollection {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentCollection {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentCollection for SeaOrmStudentCollection {
    async fn insert_one(&self, record: &StudentRecord) -> Result<StudentId, StoreError> {
        let saved = student::insert(&self.db, record.clone().into()).await?;
        Ok(StudentId::from(saved.id))
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let rows = student::find_all(&self.db).await?;
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    async fn find_one_by_id(&self, id: StudentId) -> Result<Option<StudentRecord>, StoreError> {
        Ok(student::find_by_id(&self.db, id.as_uuid()).await?.map(StudentRecord::from))
    }

    async fn find_many_by_name_contains(&self, fragment: &str) -> Result<Vec<StudentRecord>, StoreError> {
        let rows = student::search_name(&self.db, fragment).await?;
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    async fn delete_one_by_id(&self, id: StudentId) -> Result<u64, StoreError> {
        Ok(student::delete_by_id(&self.db, id.as_uuid()).await?)
    }
}
