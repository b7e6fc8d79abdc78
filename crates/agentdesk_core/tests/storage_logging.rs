//! Logging is process-global, so this file holds the only test that
//! initializes it.

use agentdesk_core::db::open_db_in_memory;
use agentdesk_core::{flush_logs, init_logging, AgentRepository, RepoError, SqliteAgentRepository};

const AGENT_ID: &str = "11111111-2222-4333-8444-555555555555";

#[test]
fn rejected_row_is_logged_without_stored_values() {
    let log_dir = tempfile::tempdir().unwrap();
    init_logging("info", log_dir.path().to_str().unwrap()).unwrap();

    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO agents (id, name, email, phone, created_at)
         VALUES (?1, 'Secret Person', 'secret.person@nowhere', '5551234567', 0);",
        [AGENT_ID],
    )
    .unwrap();

    let err = SqliteAgentRepository::new(&conn).load_agents().unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidData {
            agent_id: Some(_),
            column: "email"
        }
    ));
    assert!(!err.to_string().contains("secret.person"));

    flush_logs();
    let logs = read_logs(log_dir.path());
    assert!(logs.contains("event=agents_load module=repo status=error"));
    assert!(logs.contains("error_code=invalid_row"));
    assert!(logs.contains(&format!("agent_id={AGENT_ID}")));
    assert!(logs.contains("field=email"));
    assert!(!logs.contains("secret.person"));
    assert!(!logs.contains("Secret Person"));
}

fn read_logs(dir: &std::path::Path) -> String {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect()
}
