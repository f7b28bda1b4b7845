use rusqlite::Connection;
use taskflow_core::db::migrations::latest_version;
use taskflow_core::db::open_db_in_memory;
use taskflow_core::{SlotError, SlotRepository, SqliteSlotRepository};

#[test]
fn get_returns_none_for_absent_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    assert_eq!(repo.get("todos").unwrap(), None);
}

#[test]
fn put_then_get_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.put("todos", "[]").unwrap();
    assert_eq!(repo.get("todos").unwrap().as_deref(), Some("[]"));
}

#[test]
fn put_replaces_existing_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.put("todos", "first").unwrap();
    repo.put("todos", "second").unwrap();

    assert_eq!(repo.get("todos").unwrap().as_deref(), Some("second"));
    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 1);
}

#[test]
fn keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.put("todos", "[]").unwrap();
    repo.put("theme", "\"dark\"").unwrap();
    repo.put("todos", "[1]").unwrap();

    assert_eq!(repo.get("todos").unwrap().as_deref(), Some("[1]"));
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("\"dark\""));
}

#[test]
fn put_refreshes_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::try_new(&conn).unwrap();

    repo.put("todos", "[]").unwrap();
    conn.execute("UPDATE slots SET updated_at = 0;", []).unwrap();

    repo.put("todos", "[]").unwrap();
    let updated_at: i64 = conn
        .query_row(
            "SELECT updated_at FROM slots WHERE key = 'todos';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(updated_at > 0);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    match result {
        Err(SlotError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(SlotError::MissingRequiredTable("slots"))
    ));
}

#[test]
fn repository_rejects_slots_table_missing_a_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    // Right version, drifted table shape: `updated_at` is gone.
    conn.execute_batch(&format!(
        "CREATE TABLE slots (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL);
         PRAGMA user_version = {};",
        latest_version()
    ))
    .unwrap();

    let result = SqliteSlotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(SlotError::MissingRequiredColumn {
            table: "slots",
            column: "updated_at",
        })
    ));
}
