use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub marks: i32,
}

impl From<models::student::Model> for Student {
    fn from(m: models::student::Model) -> Self {
        Self { id: m.id, name: m.name, marks: m.marks }
    }
}

/// Create/replace payload as the client sent it; the id is always assigned by the store.
///
/// `marks` is wider than the stored column so an oversized score is reported
/// as a range violation rather than a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub marks: i64,
}

/// Checked input, ready for a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub marks: i32,
}

impl StudentInput {
    /// Check field ranges and normalize the name.
    pub fn validated(self) -> Result<NewStudent, ServiceError> {
        let name = models::student::validate_name(&self.name)?;
        let marks = models::student::validate_marks(self.marks)?;
        Ok(NewStudent { name, marks })
    }
}

impl NewStudent {
    pub(crate) fn into_student(self, id: i32) -> Student {
        Student { id, name: self.name, marks: self.marks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_trims_name() {
        let input = StudentInput { name: "  Kiran ".into(), marks: 55 }.validated().unwrap();
        assert_eq!(input, NewStudent { name: "Kiran".into(), marks: 55 });
    }

    #[test]
    fn validated_maps_model_errors() {
        let err = StudentInput { name: "Kiran".into(), marks: 150 }.validated().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("between 0 and 100")));
    }

    #[test]
    fn oversized_marks_parse_then_fail_validation() {
        let input: StudentInput = serde_json::from_str(r#"{"name":"Kiran","marks":3000000000}"#).unwrap();
        let err = input.validated().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "marks must be between 0 and 100"));
    }

    #[test]
    fn deserializes_from_json() {
        let input: StudentInput = serde_json::from_str(r#"{"name":"Kiran","marks":88}"#).unwrap();
        assert_eq!(input, StudentInput { name: "Kiran".into(), marks: 88 });
    }
}
