//! Store contract over the Postgres collection. Runs only when `DATABASE_URL`
//! is set and `SKIP_DB_TESTS` is not.

use std::sync::Arc;

use migration::MigratorTrait;
use service::student::repo::SeaOrmStudentCollection;
use service::{NewStudentInput, StoreError, StudentId, StudentStore};

async fn setup() -> anyhow::Result<Option<StudentStore>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let mut cfg = configs::DatabaseConfig::default();
    cfg.normalize_from_env();
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(StudentStore::new(Arc::new(SeaOrmStudentCollection::new(db)))))
}

fn input(first: &str, last: &str) -> NewStudentInput {
    NewStudentInput {
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        date_of_birth: Some("2003-07-22".into()),
        class_name: Some("12".into()),
        session: Some("2023-2024".into()),
    }
}

#[tokio::test]
async fn postgres_create_get_search_delete() -> anyhow::Result<()> {
    let Some(store) = setup().await? else { return Ok(()) };

    let tag = uuid::Uuid::new_v4().simple().to_string();
    let created = store.create(input(&format!("Pg{tag}"), "Brown")).await?;
    let id = created.id.to_string();

    assert_eq!(store.get_by_id(&id).await?, created);
    assert!(store.get_all().await?.contains(&created));

    let hits = store.search_by_name(&format!("pg{}", tag.to_uppercase())).await?;
    assert_eq!(hits, vec![created.clone()]);

    assert_eq!(store.delete_by_id(&id).await?, created.id);
    assert_eq!(store.get_by_id(&id).await, Err(StoreError::student_not_found()));
    assert_eq!(store.delete_by_id(&id).await, Err(StoreError::student_not_found()));
    assert_eq!(
        store.delete_by_id(&StudentId::generate().to_string()).await,
        Err(StoreError::student_not_found())
    );
    Ok(())
}
