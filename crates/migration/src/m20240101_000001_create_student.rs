//! Create `student` table.
//! One row per student with a bounded `marks` score.
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
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::Name, 100))
                    .col(integer(Student::Marks))
                    .check(Expr::col(Student::Marks).between(0, 100))
                    .to_owned(),
            )
            .await?;

        // Serves the `minMarks` filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_marks")
                    .table(Student::Table)
                    .col(Student::Marks)
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
    Name,
    Marks,
}
