//! Student domain model.
//!
//! # Responsibility
//! - Define the persisted student record and the four caller-editable fields.
//! - Provide the non-empty field check callers run before create/update.
//!
//! # Invariants
//! - `id` is unique and never reused after deletion.
//! - `enrollment_date` is formatted as `YYYY-MM-DD HH:MM:SS` and write-once.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned student identifier (SQLite `INTEGER PRIMARY KEY`).
pub type StudentId = i64;

/// `strftime` pattern used for `enrollment_date`.
pub const ENROLLMENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persisted student record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    /// Creation instant, local time, `YYYY-MM-DD HH:MM:SS`.
    pub enrollment_date: String,
}

impl Student {
    /// Returns the caller-editable part of this record.
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            course: self.course.clone(),
        }
    }
}

/// The four mutable student fields, used by create and update.
///
/// Email and phone formats are not checked anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
}

impl StudentFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            course: course.into(),
        }
    }

    /// Checks that every field is non-empty.
    ///
    /// Whitespace counts as content; nothing is trimmed.
    ///
    /// Reports the first empty field in `name, email, phone, course` order.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        let checks = [
            (StudentField::Name, &self.name),
            (StudentField::Email, &self.email),
            (StudentField::Phone, &self.phone),
            (StudentField::Course, &self.course),
        ];
        for (field, value) in checks {
            if value.is_empty() {
                return Err(StudentValidationError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Names one of the caller-editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Name,
    Email,
    Phone,
    Course,
}

impl StudentField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Course => "course",
        }
    }
}

impl Display for StudentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    MissingField(StudentField),
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for StudentValidationError {}

/// Formats an instant as an enrollment date string.
pub fn enrollment_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format(ENROLLMENT_DATE_FORMAT).to_string()
}

/// Enrollment date for a record created right now, in local time.
pub fn enrollment_timestamp_now() -> String {
    enrollment_timestamp(&Local::now())
}
