use agentdesk_core::db::open_db_in_memory;
use agentdesk_core::{
    dashboard_stats, ContactRecord, DashboardStats, RosterService, Session, SessionError,
    SqliteAgentRepository, UploadError, UploadService,
};

fn records(count: usize) -> Vec<ContactRecord> {
    (0..count)
        .map(|index| {
            ContactRecord::new(
                format!("Contact {}", index + 1),
                format!("555-{index:03}"),
                format!("Note for contact {}", index + 1),
            )
        })
        .collect()
}

#[test]
fn protected_flow_requires_a_session_token() {
    assert_eq!(Session::from_token(None).unwrap_err(), SessionError::MissingToken);
    assert_eq!(Session::from_token(Some("")).unwrap_err(), SessionError::MissingToken);
}

#[test]
fn upload_distributes_against_roster_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let session = Session::from_token(Some("demo-token")).unwrap();
    let mut roster = RosterService::load(SqliteAgentRepository::new(&conn)).unwrap();
    for (name, email) in [
        ("John Smith", "john.smith@example.com"),
        ("Sarah Johnson", "sarah.j@example.com"),
        ("Michael Brown", "m.brown@example.com"),
    ] {
        roster
            .add_agent(&session, name, email, "+1 (555) 123-4567")
            .unwrap();
    }

    let mut uploads = UploadService::new();
    let snapshot = roster.list_agents(&session);
    let distribution = uploads
        .upload(&session, "may-leads.csv", &records(25), &snapshot)
        .unwrap()
        .clone();
    assert_eq!(distribution.group_sizes(), vec![9, 8, 8]);

    // Later roster changes do not reach the stored distribution.
    roster.remove_agent(&session, snapshot[0].id).unwrap();
    let latest = uploads.latest().unwrap();
    assert_eq!(latest, &distribution);
    assert_eq!(latest.groups()[0].agent_name, "John Smith");

    assert_eq!(
        dashboard_stats(&roster, &uploads),
        DashboardStats {
            total_agents: 2,
            lists_uploaded: 1,
        }
    );
}

#[test]
fn new_upload_replaces_previous_distribution() {
    let session = Session::from_token(Some("demo-token")).unwrap();
    let mut store = agentdesk_core::RosterStore::new();
    store
        .add_agent("John Smith", "john.smith@example.com", "5551234567")
        .unwrap();
    store
        .add_agent("Sarah Johnson", "sarah.j@example.com", "5559876543")
        .unwrap();

    let mut uploads = UploadService::new();
    uploads
        .upload(&session, "first.csv", &records(10), store.agents())
        .unwrap();
    uploads
        .upload(&session, "second.xlsx", &records(3), store.agents())
        .unwrap();

    let latest = uploads.latest().unwrap();
    assert_eq!(latest.group_sizes(), vec![2, 1]);
    assert_eq!(latest.total_items(), 3);
    assert_eq!(uploads.lists_uploaded(), 2);
}

#[test]
fn rejected_uploads_keep_previous_state() {
    let session = Session::from_token(Some("demo-token")).unwrap();
    let mut store = agentdesk_core::RosterStore::new();
    store
        .add_agent("John Smith", "john.smith@example.com", "5551234567")
        .unwrap();

    let mut uploads = UploadService::new();
    uploads
        .upload(&session, "leads.csv", &records(4), store.agents())
        .unwrap();

    let err = uploads
        .upload(&session, "leads.pdf", &records(8), store.agents())
        .unwrap_err();
    assert_eq!(err, UploadError::UnsupportedFile("leads.pdf".to_string()));

    let err = uploads
        .upload(&session, "leads.csv", &records(8), &[])
        .unwrap_err();
    assert_eq!(err, UploadError::NoAgents);

    assert_eq!(uploads.lists_uploaded(), 1);
    assert_eq!(uploads.latest().unwrap().total_items(), 4);
}

#[test]
fn empty_list_still_counts_as_upload() {
    let session = Session::from_token(Some("demo-token")).unwrap();
    let mut store = agentdesk_core::RosterStore::new();
    store
        .add_agent("John Smith", "john.smith@example.com", "5551234567")
        .unwrap();

    let mut uploads = UploadService::new();
    let distribution = uploads
        .upload(&session, "empty.csv", &[], store.agents())
        .unwrap();
    assert_eq!(distribution.group_sizes(), vec![0]);
}
