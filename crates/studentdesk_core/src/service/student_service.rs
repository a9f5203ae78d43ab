//! Student administration use-case service.
//!
//! # Responsibility
//! - Run the required-field check before create/update reach storage.
//! - Provide the selection and summary helpers administration screens use.
//!
//! # Invariants
//! - A validation failure never changes stored state.
//! - Unknown ids keep the store's no-op semantics; the service adds no
//!   not-found errors.

use crate::model::student::{Student, StudentFields, StudentId, StudentValidationError};
use crate::repo::student_repo::{RepoError, StudentRepository};
use log::warn;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, StudentServiceError>;

/// Service error for student administration use-cases.
#[derive(Debug)]
pub enum StudentServiceError {
    /// A required field was empty; nothing was written.
    Validation(StudentValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StudentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StudentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for StudentServiceError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StudentServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Headline figures for the student listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total_students: usize,
    /// Distinct `course` values, compared exactly.
    pub unique_courses: usize,
}

impl RosterSummary {
    pub fn from_students(students: &[Student]) -> Self {
        let courses: BTreeSet<&str> = students
            .iter()
            .map(|student| student.course.as_str())
            .collect();
        Self {
            total_students: students.len(),
            unique_courses: courses.len(),
        }
    }
}

/// Use-case wrapper over any student repository.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and enrolls a new student.
    pub fn add_student(&self, fields: &StudentFields) -> ServiceResult<()> {
        if let Err(err) = fields.validate() {
            warn!("event=student_add module=service status=rejected reason={err}");
            return Err(err.into());
        }
        self.repo.create_student(fields)?;
        Ok(())
    }

    /// Validates and overwrites the editable fields of `id`.
    ///
    /// An unknown `id` passes validation and then touches nothing.
    pub fn edit_student(&self, id: StudentId, fields: &StudentFields) -> ServiceResult<()> {
        if let Err(err) = fields.validate() {
            warn!("event=student_edit module=service status=rejected id={id} reason={err}");
            return Err(err.into());
        }
        self.repo.update_student(id, fields)?;
        Ok(())
    }

    pub fn remove_student(&self, id: StudentId) -> ServiceResult<()> {
        self.repo.delete_student(id)?;
        Ok(())
    }

    pub fn student(&self, id: StudentId) -> ServiceResult<Option<Student>> {
        Ok(self.repo.get_student(id)?)
    }

    pub fn students(&self) -> ServiceResult<Vec<Student>> {
        Ok(self.repo.list_students()?)
    }

    pub fn roster_summary(&self) -> ServiceResult<RosterSummary> {
        let students = self.repo.list_students()?;
        Ok(RosterSummary::from_students(&students))
    }
}

/// Picks the first student whose name equals `name` exactly.
///
/// Names are not unique; later records with the same name are unreachable
/// through this lookup.
pub fn select_by_name<'a>(students: &'a [Student], name: &str) -> Option<&'a Student> {
    students.iter().find(|student| student.name == name)
}
