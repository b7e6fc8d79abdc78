use agentdesk_core::db::migrations::{apply_migrations, latest_version, schema_version};
use agentdesk_core::db::{open_db, open_db_in_memory};
use agentdesk_core::{Agent, AgentRepository, RepoError, SqliteAgentRepository};
use rusqlite::Connection;

const AGENT_ID: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn fresh_database_gets_agents_table_and_created_at_index() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_eq!(
        agent_columns(&conn),
        ["id", "name", "email", "phone", "created_at"]
    );
    assert!(index_exists(&conn, "idx_agents_created_at"));
}

#[test]
fn reopening_current_database_applies_no_steps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agentdesk.sqlite3");

    drop(open_db(&path).unwrap());
    let mut conn = open_db(&path).unwrap();

    assert_eq!(apply_migrations(&mut conn).unwrap(), 0);
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
}

#[test]
fn unversioned_file_is_brought_to_latest() {
    let mut conn = Connection::open_in_memory().unwrap();

    assert_eq!(apply_migrations(&mut conn).unwrap(), latest_version());
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert!(index_exists(&conn, "idx_agents_created_at"));
}

#[test]
fn newer_schema_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.pragma_update(None, "user_version", 999).unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(err.error_code(), "schema_too_new");
    match err {
        RepoError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_text_columns_violate_check_constraints() {
    let conn = open_db_in_memory().unwrap();

    for (name, email, phone) in [
        ("  ", "ada@example.com", "5551234567"),
        ("Ada", "", "5551234567"),
        ("Ada", "ada@example.com", "   "),
    ] {
        let result = conn.execute(
            "INSERT INTO agents (id, name, email, phone, created_at)
             VALUES (?1, ?2, ?3, ?4, 0);",
            [AGENT_ID, name, email, phone],
        );
        assert!(
            matches!(
                result,
                Err(rusqlite::Error::SqliteFailure(ref err, _))
                    if err.code == rusqlite::ErrorCode::ConstraintViolation
            ),
            "name={name:?} email={email:?} phone={phone:?}"
        );
    }
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn duplicate_id_insert_violates_primary_key() {
    let conn = open_db_in_memory().unwrap();
    let insert = "INSERT INTO agents (id, name, email, phone, created_at)
                  VALUES (?1, 'Ada', 'ada@example.com', '5551234567', 0);";

    conn.execute(insert, [AGENT_ID]).unwrap();
    assert!(conn.execute(insert, [AGENT_ID]).is_err());
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn upsert_keeps_rowid_of_first_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAgentRepository::new(&conn);

    let mut first = Agent::new("John Smith", "john@example.com", "5551234567").unwrap();
    let second = Agent::new("Sarah Johnson", "sarah@example.com", "5559876543").unwrap();
    repo.put_agent(&first).unwrap();
    repo.put_agent(&second).unwrap();
    let rowid_before = rowid_of(&conn, &first);

    first.phone = "5550001111".to_string();
    repo.put_agent(&first).unwrap();

    assert_eq!(rowid_of(&conn, &first), rowid_before);
    assert_eq!(row_count(&conn), 2);
    assert_eq!(repo.load_agents().unwrap(), vec![first, second]);
}

fn agent_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(agents);").unwrap();
    stmt.query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn index_exists(conn: &Connection, index_name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'index' AND tbl_name = 'agents' AND name = ?1
        );",
        [index_name],
        |row| row.get(0),
    )
    .unwrap()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM agents;", [], |row| row.get(0))
        .unwrap()
}

fn rowid_of(conn: &Connection, agent: &Agent) -> i64 {
    conn.query_row(
        "SELECT rowid FROM agents WHERE id = ?1;",
        [agent.id.to_string()],
        |row| row.get(0),
    )
    .unwrap()
}
