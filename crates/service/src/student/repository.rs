use async_trait::async_trait;

use super::domain::{NewStudent, Student};
use crate::errors::ServiceError;

/// Persistence for student records.
///
/// Inputs reaching a repository have already been validated by `StudentService`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students ordered by id; with `min_marks`, only those scoring at least that much.
    async fn list(&self, min_marks: Option<i32>) -> Result<Vec<Student>, ServiceError>;
    async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError>;
    /// Overwrite name and marks; `None` when the id does not exist.
    async fn replace(&self, id: i32, input: NewStudent) -> Result<Option<Student>, ServiceError>;
    /// `true` if a record was removed.
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
}
