use rusqlite::Connection;
use studentdesk_core::db::migrations::latest_version;
use studentdesk_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "students");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO students (name, email, phone, course, enrollment_date)
             VALUES ('Alice', 'a@x.com', '555-0001', 'Data Science', '2024-01-01 00:00:00');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(student_count(&conn_second), 1);
}

#[test]
fn students_table_has_expected_columns() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(students);").unwrap();
    let columns: Vec<(String, String, i64, i64)> = stmt
        .query_map([], |row| {
            Ok((row.get(1)?, row.get(2)?, row.get(3)?, row.get(5)?))
        })
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let expected = [
        ("id", "INTEGER", 0, 1),
        ("name", "TEXT", 1, 0),
        ("email", "TEXT", 1, 0),
        ("phone", "TEXT", 1, 0),
        ("course", "TEXT", 1, 0),
        ("enrollment_date", "TEXT", 1, 0),
    ];
    assert_eq!(columns.len(), expected.len());
    for (column, (name, kind, not_null, pk)) in columns.iter().zip(expected) {
        assert_eq!(column.0, name);
        assert_eq!(column.1, kind);
        assert_eq!(column.2, not_null, "not-null flag for {name}");
        assert_eq!(column.3, pk, "primary-key flag for {name}");
    }
}

#[test]
fn existing_unversioned_students_table_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            course TEXT NOT NULL,
            enrollment_date TEXT NOT NULL
        );
        INSERT INTO students (name, email, phone, course, enrollment_date)
        VALUES ('Legacy', 'l@x.com', '555-0009', 'Web Development', '2023-05-01 10:00:00');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(student_count(&conn), 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn student_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
