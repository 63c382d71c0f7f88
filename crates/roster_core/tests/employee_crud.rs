use roster_core::db::open_db_in_memory;
use roster_core::{
    Employee, EmployeeDraft, EmployeeRepository, EmployeeStore, RepoError,
    SqliteEmployeeRepository, WriteOutcome,
};
use std::collections::HashSet;

fn draft(name: &str, age: Option<i64>, occupation: Option<&str>) -> EmployeeDraft {
    EmployeeDraft::new(name, age, occupation.map(str::to_string))
}

#[test]
fn first_insert_gets_id_one_and_fetch_returns_it() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let id = repo
        .insert_employee(&draft("Alice", Some(30), Some("Engineer")))
        .unwrap();
    assert_eq!(id, 1);

    let rows = repo.fetch_all_employees().unwrap();
    assert_eq!(
        rows,
        vec![Employee {
            id: 1,
            name: "Alice".to_string(),
            age: Some(30),
            occupation: Some("Engineer".to_string()),
        }]
    );
}

#[test]
fn insert_roundtrip_assigns_fresh_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let inputs = [
        draft("Alice", Some(30), Some("Engineer")),
        draft("", None, None),
        draft("Bob", Some(-4), Some("")),
        draft("Alice", Some(30), Some("Engineer")),
    ];
    let mut seen = HashSet::new();
    for input in &inputs {
        let id = repo.insert_employee(input).unwrap();
        assert!(seen.insert(id), "id {id} was returned twice");

        let rows = repo.fetch_all_employees().unwrap();
        let matching: Vec<_> = rows.iter().filter(|row| row.id == id).collect();
        assert_eq!(matching.len(), 1);
        assert!(matching[0].matches(input));
    }
}

#[test]
fn fetch_all_returns_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    for name in ["c", "a", "b"] {
        repo.insert_employee(&draft(name, None, None)).unwrap();
    }

    let names: Vec<_> = repo
        .fetch_all_employees()
        .unwrap()
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn update_overwrites_target_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let alice = repo
        .insert_employee(&draft("Alice", Some(30), Some("Engineer")))
        .unwrap();
    let bob = repo
        .insert_employee(&draft("Bob", Some(45), Some("Clerk")))
        .unwrap();
    let before = repo.fetch_all_employees().unwrap();

    let replacement = draft("Alice", None, None);
    let outcome = repo.update_employee(alice, &replacement).unwrap();
    assert_eq!(outcome, WriteOutcome::Applied);

    let after = repo.fetch_all_employees().unwrap();
    assert_eq!(after.len(), before.len());
    let updated = after.iter().find(|row| row.id == alice).unwrap();
    assert!(updated.matches(&replacement));
    let untouched_before = before.iter().find(|row| row.id == bob).unwrap();
    let untouched_after = after.iter().find(|row| row.id == bob).unwrap();
    assert_eq!(untouched_before, untouched_after);
}

#[test]
fn update_and_delete_missing_id_are_silent_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.insert_employee(&draft("Alice", Some(30), None)).unwrap();
    let before = repo.fetch_all_employees().unwrap();

    assert_eq!(
        repo.update_employee(99, &draft("Ghost", None, None)).unwrap(),
        WriteOutcome::NoMatch
    );
    assert_eq!(repo.delete_employee(99).unwrap(), WriteOutcome::NoMatch);
    assert_eq!(repo.fetch_all_employees().unwrap(), before);
}

#[test]
fn delete_removes_exactly_one_row_and_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let first = repo.insert_employee(&draft("a", None, None)).unwrap();
    let second = repo.insert_employee(&draft("b", None, None)).unwrap();

    assert_eq!(repo.delete_employee(second).unwrap(), WriteOutcome::Applied);
    let rows = repo.fetch_all_employees().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, first);

    let third = repo.insert_employee(&draft("c", None, None)).unwrap();
    assert!(third > second);
}

#[test]
fn null_name_in_storage_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "DROP TABLE employees;
         CREATE TABLE employees (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT,
             age INTEGER,
             occupation TEXT
         );
         INSERT INTO employees (name) VALUES (NULL);",
    )
    .unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let err = repo.fetch_all_employees().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn store_persists_across_initialize_and_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let store = EmployeeStore::initialize(&path).unwrap();
    assert_eq!(store.location(), Some(path.as_path()));
    let id = store
        .repository()
        .insert_employee(&draft("Alice", Some(30), Some("Engineer")))
        .unwrap();
    store.close().unwrap();

    let reopened = EmployeeStore::initialize(&path).unwrap();
    let rows = reopened.repository().fetch_all_employees().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    reopened.close().unwrap();
}

#[test]
fn in_memory_store_has_no_location() {
    let store = EmployeeStore::open_in_memory().unwrap();
    assert!(store.location().is_none());
    assert!(store.repository().fetch_all_employees().unwrap().is_empty());
}
