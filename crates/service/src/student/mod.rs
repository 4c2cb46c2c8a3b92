//! Student module: three-layer architecture (domain, repository, service).
//!
//! Storage is pluggable: an in-memory map or the `student` SQL table.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewStudent, Student, StudentInput};
pub use repo::{memory::InMemoryStudentRepository, seaorm::SeaOrmStudentRepository};
pub use repository::StudentRepository;
pub use service::StudentService;
