//! Student repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD statements over the `students` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The repository does not validate field content; callers do.
//! - Each operation is exactly one SQL statement.
//! - Unknown ids are never errors: reads return `None`, writes touch zero rows.

use crate::db::DbError;
use crate::model::student::{enrollment_timestamp_now, Student, StudentFields, StudentId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    phone,
    course,
    enrollment_date
FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    /// Inserts a record; the store assigns `id` and `enrollment_date`.
    ///
    /// The generated id is not returned.
    fn create_student(&self, fields: &StudentFields) -> RepoResult<()>;

    /// Returns every record in storage iteration order.
    fn list_students(&self) -> RepoResult<Vec<Student>>;

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>>;

    /// Overwrites the four mutable fields. No matching row is a no-op.
    fn update_student(&self, id: StudentId, fields: &StudentFields) -> RepoResult<()>;

    /// Removes the record permanently. No matching row is a no-op.
    fn delete_student(&self, id: StudentId) -> RepoResult<()>;
}

/// SQLite-backed student repository over a borrowed connection.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Runs the update and returns the number of rows it touched.
    pub fn update_student_counted(
        &self,
        id: StudentId,
        fields: &StudentFields,
    ) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE students
             SET
                name = ?1,
                email = ?2,
                phone = ?3,
                course = ?4
             WHERE id = ?5;",
            params![
                fields.name.as_str(),
                fields.email.as_str(),
                fields.phone.as_str(),
                fields.course.as_str(),
                id,
            ],
        )?;
        Ok(changed)
    }

    /// Runs the delete and returns the number of rows it touched.
    pub fn delete_student_counted(&self, id: StudentId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn create_student(&self, fields: &StudentFields) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO students (
                name,
                email,
                phone,
                course,
                enrollment_date
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                fields.name.as_str(),
                fields.email.as_str(),
                fields.phone.as_str(),
                fields.course.as_str(),
                enrollment_timestamp_now(),
            ],
        )?;

        Ok(())
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(&format!("{STUDENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let student = self
            .conn
            .query_row(
                &format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_student_row,
            )
            .optional()?;
        Ok(student)
    }

    fn update_student(&self, id: StudentId, fields: &StudentFields) -> RepoResult<()> {
        self.update_student_counted(id, fields)?;
        Ok(())
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.delete_student_counted(id)?;
        Ok(())
    }
}

fn parse_student_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        course: row.get("course")?,
        enrollment_date: row.get("enrollment_date")?,
    })
}
