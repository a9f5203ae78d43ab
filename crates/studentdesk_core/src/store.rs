//! Student record store.
//!
//! # Responsibility
//! - Own the database location and expose the record-store operations.
//! - Scope one SQLite connection to each operation.
//!
//! # Invariants
//! - Every operation opens a fresh connection and drops it before returning.
//! - No operation spans more than one SQL statement against student data.
//! - Unknown ids are silent no-ops for update/delete and `None` for reads.

use crate::config::StoreConfig;
use crate::db::{open_db, DbResult};
use crate::model::student::{Student, StudentFields, StudentId};
use crate::repo::student_repo::{
    RepoError, RepoResult, SqliteStudentRepository, StudentRepository,
};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Durable student storage bound to one database file.
#[derive(Debug, Clone)]
pub struct StudentStore {
    config: StoreConfig,
}

impl StudentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a store over `db_path` with otherwise default config.
    pub fn at(db_path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig::new(db_path.as_ref()))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Ensures the `students` table exists.
    ///
    /// Safe to call any number of times. Storage failures propagate.
    pub fn initialize(&self) -> DbResult<()> {
        let started_at = Instant::now();
        match self.connect() {
            Ok(_conn) => {
                info!(
                    "event=store_init module=store status=ok duration_ms={} db_path={}",
                    started_at.elapsed().as_millis(),
                    self.config.db_path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_init module=store status=error duration_ms={} db_path={} error={}",
                    started_at.elapsed().as_millis(),
                    self.config.db_path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Creates a record with a store-assigned id and enrollment date.
    pub fn create(&self, fields: &StudentFields) -> RepoResult<()> {
        self.run("student_create", |repo| repo.create_student(fields))
    }

    /// Returns every record in storage order; an empty store yields `[]`.
    pub fn list_all(&self) -> RepoResult<Vec<Student>> {
        self.run("student_list", |repo| repo.list_students())
    }

    pub fn get_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        self.run("student_get", |repo| repo.get_student(id))
    }

    /// Overwrites name, email, phone and course for `id`.
    pub fn update(&self, id: StudentId, fields: &StudentFields) -> RepoResult<()> {
        self.run_counted("student_update", |repo| {
            repo.update_student_counted(id, fields)
        })?;
        Ok(())
    }

    pub fn delete(&self, id: StudentId) -> RepoResult<()> {
        self.run_counted("student_delete", |repo| repo.delete_student_counted(id))?;
        Ok(())
    }

    fn connect(&self) -> DbResult<Connection> {
        open_db(&self.config.db_path)
    }

    fn run<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&SqliteStudentRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        self.run_logged(event, op, |_| None)
    }

    fn run_counted(
        &self,
        event: &'static str,
        op: impl FnOnce(&SqliteStudentRepository<'_>) -> RepoResult<usize>,
    ) -> RepoResult<usize> {
        self.run_logged(event, op, |changed| Some(*changed))
    }

    fn run_logged<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&SqliteStudentRepository<'_>) -> RepoResult<T>,
        rows_affected: impl FnOnce(&T) -> Option<usize>,
    ) -> RepoResult<T> {
        let started_at = Instant::now();
        let result = self
            .connect()
            .map_err(RepoError::from)
            .and_then(|conn| op(&SqliteStudentRepository::new(&conn)));
        let duration_ms = started_at.elapsed().as_millis();

        match &result {
            Ok(value) => info!("{}", ok_line(event, duration_ms, rows_affected(value))),
            Err(err) => error!(
                "event={event} module=store status=error duration_ms={duration_ms} error={err}"
            ),
        }
        result
    }
}

fn ok_line(event: &str, duration_ms: u128, rows_affected: Option<usize>) -> String {
    let mut line = format!("event={event} module=store status=ok duration_ms={duration_ms}");
    if let Some(changed) = rows_affected {
        line.push_str(&format!(" rows_affected={changed}"));
    }
    line
}

impl StudentRepository for StudentStore {
    fn create_student(&self, fields: &StudentFields) -> RepoResult<()> {
        self.create(fields)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        self.list_all()
    }

    fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        self.get_by_id(id)
    }

    fn update_student(&self, id: StudentId, fields: &StudentFields) -> RepoResult<()> {
        self.update(id, fields)
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.delete(id)
    }
}
