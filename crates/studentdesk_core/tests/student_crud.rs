use chrono::NaiveDateTime;
use studentdesk_core::db::open_db_in_memory;
use studentdesk_core::model::student::ENROLLMENT_DATE_FORMAT;
use studentdesk_core::{SqliteStudentRepository, StudentFields, StudentRepository};

fn alice() -> StudentFields {
    StudentFields::new("Alice", "a@x.com", "555-0001", "Data Science")
}

#[test]
fn create_then_list_returns_the_new_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    repo.create_student(&alice()).unwrap();

    let students = repo.list_students().unwrap();
    assert_eq!(students.len(), 1);
    let created = &students[0];
    assert_eq!(created.fields(), alice());
    assert!(created.id > 0);
    NaiveDateTime::parse_from_str(&created.enrollment_date, ENROLLMENT_DATE_FORMAT)
        .expect("enrollment date should use YYYY-MM-DD HH:MM:SS");
}

#[test]
fn list_on_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    assert!(repo.list_students().unwrap().is_empty());
}

#[test]
fn list_returns_records_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    for name in ["Alice", "Bob", "Cara"] {
        repo.create_student(&StudentFields::new(name, "x@x.com", "555", "Data Science"))
            .unwrap();
    }

    let names: Vec<String> = repo
        .list_students()
        .unwrap()
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Cara"]);
}

#[test]
fn update_replaces_fields_and_keeps_identity_and_enrollment_date() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);
    repo.create_student(&alice()).unwrap();
    let before = repo.list_students().unwrap().remove(0);

    let edited = StudentFields::new("Alice Smith", "alice@y.org", "555-9999", "Machine Learning");
    repo.update_student(before.id, &edited).unwrap();

    let after = repo.get_student(before.id).unwrap().unwrap();
    assert_eq!(after.fields(), edited);
    assert_eq!(after.id, before.id);
    assert_eq!(after.enrollment_date, before.enrollment_date);
}

#[test]
fn update_counted_reports_zero_rows_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);
    repo.create_student(&alice()).unwrap();

    let changed = repo.update_student_counted(404, &alice()).unwrap();
    assert_eq!(changed, 0);
    assert_eq!(repo.delete_student_counted(404).unwrap(), 0);
}

#[test]
fn delete_removes_only_the_target() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);
    repo.create_student(&alice()).unwrap();
    repo.create_student(&StudentFields::new("Bob", "b@x.com", "555-0002", "Web Development"))
        .unwrap();
    let students = repo.list_students().unwrap();

    repo.delete_student(students[0].id).unwrap();

    let remaining = repo.list_students().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, students[1].id);
    assert!(repo.get_student(students[0].id).unwrap().is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);
    repo.create_student(&alice()).unwrap();
    let first_id = repo.list_students().unwrap()[0].id;
    repo.delete_student(first_id).unwrap();

    repo.create_student(&alice()).unwrap();
    let second_id = repo.list_students().unwrap()[0].id;
    assert!(second_id > first_id);
}

#[test]
fn repository_does_not_validate_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    repo.create_student(&StudentFields::default()).unwrap();
    assert_eq!(repo.list_students().unwrap()[0].name, "");
}
