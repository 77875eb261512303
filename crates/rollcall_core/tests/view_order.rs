use chrono::{TimeZone, Utc};
use rollcall_core::{update, BoardState, Msg, ParticipantSeed, ProbeOutcome, ProbeReport};

fn seed(id: &str, name: &str) -> ParticipantSeed {
    ParticipantSeed {
        id: id.to_string(),
        name: name.to_string(),
        file_url: format!("https://files.example.com/{id}.json"),
    }
}

fn complete(state: BoardState, id: &str, secs: u32) -> BoardState {
    let (state, _effects) = update(
        state,
        Msg::PollCompleted {
            reports: vec![ProbeReport {
                id: id.to_string(),
                outcome: ProbeOutcome::Completed,
            }],
            observed_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, secs).unwrap(),
        },
    );
    state
}

#[test]
fn completed_sort_before_pending_newest_first() {
    let state = BoardState::from_roster(vec![
        seed("1", "Charlotte Clark"),
        seed("2", "Mason Lee"),
        seed("3", "Olivia Davis"),
        seed("4", "Emma Wilson"),
    ])
    .unwrap();

    let state = complete(state, "2", 10);
    let state = complete(state, "4", 20);

    let names: Vec<_> = state.view().rows.iter().map(|r| r.name.clone()).collect();
    assert_eq!(
        names,
        vec![
            "Emma Wilson",     // completed last
            "Mason Lee",       // completed first
            "Charlotte Clark", // pending, alphabetical
            "Olivia Davis",
        ]
    );
}

#[test]
fn view_order_does_not_mutate_roster_order() {
    let state = BoardState::from_roster(vec![seed("1", "Zoe"), seed("2", "Abe")]).unwrap();
    let state = complete(state, "1", 10);

    // Presentation reorders; the underlying pending set keeps roster order.
    assert_eq!(state.view().rows[0].name, "Zoe");
    assert_eq!(
        state
            .pending_targets()
            .iter()
            .map(|t| t.id.clone())
            .collect::<Vec<_>>(),
        vec!["2".to_string()]
    );
}
