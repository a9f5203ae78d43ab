//! Domain model for student records.
//!
//! # Responsibility
//! - Define the student record and its mutable field set.
//! - Hold the course catalog offered by the enrollment form.
//!
//! # Invariants
//! - `id` and `enrollment_date` are assigned by the store and never rewritten.
//! - Deletion is permanent; there is no tombstone state.

pub mod course;
pub mod student;
