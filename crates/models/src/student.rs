use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const MARKS_MIN: i32 = 0;
pub const MARKS_MAX: i32 = 100;
pub const NAME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub marks: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String, ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("name must not be blank".into()));
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(trimmed.to_string())
}

/// Accepts any integer the client sent and narrows it once it is known to be in range.
pub fn validate_marks(marks: i64) -> Result<i32, ModelError> {
    let out_of_range = || ModelError::Validation(format!("marks must be between {MARKS_MIN} and {MARKS_MAX}"));
    if !(i64::from(MARKS_MIN)..=i64::from(MARKS_MAX)).contains(&marks) {
        return Err(out_of_range());
    }
    i32::try_from(marks).map_err(|_| out_of_range())
}

pub async fn create(db: &DatabaseConnection, name: &str, marks: i32) -> Result<Model, ModelError> {
    let name = validate_name(name)?;
    let marks = validate_marks(marks.into())?;
    let am = ActiveModel {
        name: Set(name),
        marks: Set(marks),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
