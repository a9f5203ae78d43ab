//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the student data access contract.
//! - Isolate SQLite query details from store and service orchestration.
//!
//! # Invariants
//! - Repository APIs never report not-found as an error.

pub mod student_repo;
