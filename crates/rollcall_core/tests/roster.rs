use rollcall_core::{BoardState, ParticipantSeed, RosterError};

fn seed(id: &str, name: &str, url: &str) -> ParticipantSeed {
    ParticipantSeed {
        id: id.to_string(),
        name: name.to_string(),
        file_url: url.to_string(),
    }
}

#[test]
fn builds_roster_in_insertion_order() {
    let state = BoardState::from_roster(vec![
        seed("1", "Jane Smith", "https://files.example.com/1.json"),
        seed("2", "Alice Johnson", "https://files.example.com/2.json"),
    ])
    .unwrap();

    assert_eq!(state.count(), 2);
    assert_eq!(state.completed_count(), 0);

    let targets = state.pending_targets();
    let ids: Vec<_> = targets.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(targets[0].file_url, "https://files.example.com/1.json");
}

#[test]
fn rejects_duplicate_id() {
    let err = BoardState::from_roster(vec![
        seed("1", "Jane Smith", "https://files.example.com/1.json"),
        seed("1", "Alice Johnson", "https://files.example.com/2.json"),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        RosterError::DuplicateId {
            id: "1".to_string()
        }
    );
}

#[test]
fn rejects_blank_id_and_name() {
    let err = BoardState::from_roster(vec![seed("  ", "Jane", "https://example.com/1")]).unwrap_err();
    assert_eq!(err, RosterError::EmptyId);

    let err = BoardState::from_roster(vec![seed("1", "", "https://example.com/1")]).unwrap_err();
    assert_eq!(
        err,
        RosterError::EmptyName {
            id: "1".to_string()
        }
    );
}

#[test]
fn rejects_malformed_file_url() {
    let err =
        BoardState::from_roster(vec![seed("1", "Jane Smith", "not a url")]).unwrap_err();
    assert!(matches!(err, RosterError::InvalidUrl { ref id, .. } if id == "1"));
}

#[test]
fn empty_roster_is_allowed() {
    let state = BoardState::from_roster(Vec::new()).unwrap();
    assert_eq!(state.count(), 0);
    assert!(state.pending_targets().is_empty());
}
