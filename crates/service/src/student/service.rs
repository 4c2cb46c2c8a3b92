use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Student, StudentInput};
use super::repository::StudentRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "student";

/// Student business service independent of web framework and storage.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self, min_marks: Option<i32>) -> Result<Vec<Student>, ServiceError> {
        self.repo.list(min_marks).await
    }

    /// Validate and store a new student.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::student::{InMemoryStudentRepository, StudentInput, StudentService};
    /// let svc = StudentService::new(Arc::new(InMemoryStudentRepository::new()));
    /// let input = StudentInput { name: "Asha".into(), marks: 87 };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// assert_eq!(created.name, "Asha");
    /// ```
    #[instrument(skip(self, input), fields(marks = input.marks))]
    pub async fn create(&self, input: StudentInput) -> Result<Student, ServiceError> {
        let input = input.validated()?;
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "student_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<Student, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Full replacement of name and marks. Validation runs before the existence check.
    #[instrument(skip(self, input), fields(marks = input.marks))]
    pub async fn update(&self, id: i32, input: StudentInput) -> Result<Student, ServiceError> {
        let input = input.validated()?;
        let updated = self
            .repo
            .replace(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "student_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(id, "student_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{InMemoryStudentRepository, SeaOrmStudentRepository};
    use crate::test_support::get_db;

    fn input(name: &str, marks: i64) -> StudentInput {
        StudentInput { name: name.into(), marks }
    }

    /// Same scenario for every backend.
    async fn exercise(svc: StudentService) {
        let created = svc.create(input("Asha", 87)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Asha");
        assert_eq!(created.marks, 87);
        assert_eq!(svc.get(created.id).await.unwrap(), created);

        let err = svc.update(created.id + 1000, input("Ghost", 50)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let updated = svc.update(created.id, input("Asha R", 92)).await.unwrap();
        assert_eq!(updated, Student { id: created.id, name: "Asha R".into(), marks: 92 });

        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn crud_in_memory() {
        exercise(StudentService::new(Arc::new(InMemoryStudentRepository::new()))).await;
    }

    #[tokio::test]
    async fn crud_sqlite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        exercise(StudentService::new(Arc::new(SeaOrmStudentRepository::new(db)))).await;
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_marks_rejected_without_storing() {
        let svc = StudentService::new(Arc::new(InMemoryStudentRepository::new()));
        for marks in [-1, 101, 150, 3_000_000_000, -3_000_000_000] {
            assert!(matches!(svc.create(input("Dev", marks)).await, Err(ServiceError::Validation(_))));
        }
        assert!(matches!(svc.create(input("   ", 50)).await, Err(ServiceError::Validation(_))));
        assert!(svc.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_update_wins_over_missing_id() {
        let svc = StudentService::new(Arc::new(InMemoryStudentRepository::new()));
        let err = svc.update(77, input("", 10)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn list_applies_min_marks() {
        let svc = StudentService::new(Arc::new(InMemoryStudentRepository::new()));
        svc.create(input("Low", 30)).await.unwrap();
        svc.create(input("High", 80)).await.unwrap();
        let high = svc.list(Some(50)).await.unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].name, "High");
    }
}
