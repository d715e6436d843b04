use campus_events_client::{Profile, Role, Session, UserId};
use campus_events_frontend::session_store::SessionFile;
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session {
        access_token: "token-abc".to_string(),
        profile: Profile {
            id: UserId::new(),
            email: "ada@college.edu".to_string(),
            full_name: "Ada Lovelace".to_string(),
            role: Role::Admin,
        },
    }
}

#[test]
fn saved_session_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let file = SessionFile::new(dir.path().join("nested").join("session.json"));
    let saved = session();

    file.save(&saved).unwrap();
    assert_eq!(file.load(), Some(saved));
}

#[test]
fn clear_removes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let file = SessionFile::new(dir.path().join("session.json"));

    file.save(&session()).unwrap();
    file.clear().unwrap();
    assert!(!file.path().exists());
    assert_eq!(file.load(), None);
    file.clear().unwrap();
}

#[test]
fn corrupt_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    assert_eq!(SessionFile::new(path).load(), None);
}
