//! Create `student` table.
//! One row per student document; the id is minted by the record store, never by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(uuid(Student::Id).primary_key())
                    .col(text(Student::FirstName))
                    .col(text(Student::LastName))
                    .col(string_len(Student::DateOfBirth, 32))
                    .col(text(Student::ClassName))
                    .col(text(Student::Session))
                    .col(date(Student::CreatedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    ClassName,
    Session,
    CreatedDate,
}
