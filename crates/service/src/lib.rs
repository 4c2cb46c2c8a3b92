//! Service layer providing student CRUD on top of `models`.
//! - Separates business rules from storage behind `StudentRepository`.
//! - Reuses the field validators defined in the `models` crate.

pub mod errors;
pub mod student;
#[cfg(test)]
pub mod test_support;
