use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::student::domain::{NewStudent, Student};
use crate::student::repository::StudentRepository;

/// Map-backed store. Ids come from a counter and are never reused.
pub struct InMemoryStudentRepository {
    records: RwLock<BTreeMap<i32, Student>>,
    next_id: AtomicI32,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self { records: RwLock::new(BTreeMap::new()), next_id: AtomicI32::new(1) }
    }

    fn allocate_id(&self) -> Result<i32, ServiceError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| ServiceError::Storage("student id space exhausted".into()))
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self, min_marks: Option<i32>) -> Result<Vec<Student>, ServiceError> {
        let map = self.records.read().await;
        Ok(map
            .values()
            .filter(|s| min_marks.map_or(true, |min| s.marks >= min))
            .cloned()
            .collect())
    }

    async fn insert(&self, input: NewStudent) -> Result<Student, ServiceError> {
        let id = self.allocate_id()?;
        let student = input.into_student(id);
        self.records.write().await.insert(id, student.clone());
        Ok(student)
    }

    async fn find(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn replace(&self, id: i32, input: NewStudent) -> Result<Option<Student>, ServiceError> {
        let mut map = self.records.write().await;
        let Some(existing) = map.get_mut(&id) else { return Ok(None) };
        existing.name = input.name;
        existing.marks = input.marks;
        Ok(Some(existing.clone()))
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
