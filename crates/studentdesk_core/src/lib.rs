//! Core logic for the student administration desk.
//! This crate owns the `students` record store and its caller-side checks.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{load_config, ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::{course_position, COURSES};
pub use model::student::{Student, StudentField, StudentFields, StudentId, StudentValidationError};
pub use repo::student_repo::{RepoError, RepoResult, SqliteStudentRepository, StudentRepository};
pub use service::student_service::{
    select_by_name, RosterSummary, StudentService, StudentServiceError,
};
pub use store::StudentStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
