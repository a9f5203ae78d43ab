//! Core use-case services.
//!
//! # Responsibility
//! - Apply caller-side checks before delegating to storage.
//! - Keep front ends decoupled from storage details.

pub mod student_service;
