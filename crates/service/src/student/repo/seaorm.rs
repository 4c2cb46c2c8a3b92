use async_trait::async_trait;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::student::{self, Entity as StudentEntity};

use crate::errors::ServiceError;
use crate::student::domain::{NewStudent, Student};
use crate::student::repository::StudentRepository;

/// SeaORM-backed repository over the `student` table.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn list(&self, min_marks: Option<i32>) -> Result<Vec<Student>, ServiceError> {
        let mut finder = StudentEntity::find();
        if let Some(min) = min_marks { finder = finder.filter(student::Column::Marks.gte(min)); }
        let rows = finder.order_by_asc(student::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError> {
        let created = student::create(&self.db, &input.name, input.marks).await?;
        Ok(created.into())
    }

    async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        let found = StudentEntity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Student::from))
    }

    /// Single conditional UPDATE, so a row deleted concurrently reads as missing.
    async fn replace(&self, id: i32, input: NewStudent) -> Result<Option<Student>, ServiceError> {
        let res = StudentEntity::update_many()
            .col_expr(student::Column::Name, Expr::value(input.name))
            .col_expr(student::Column::Marks, Expr::value(input.marks))
            .filter(student::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        let res = StudentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
