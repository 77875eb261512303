use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::state::Participant;
use crate::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardViewModel {
    pub total: usize,
    pub completed: usize,
    pub rows: Vec<ParticipantRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRowView {
    pub id: ParticipantId,
    pub name: String,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ParticipantRowView {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Presentation order: completed first, most recent completion on top,
/// pending alphabetically. Recomputed per view, never stored.
pub(crate) fn presentation_rows(participants: &[Participant]) -> Vec<ParticipantRowView> {
    let mut rows: Vec<ParticipantRowView> = participants
        .iter()
        .map(|p| ParticipantRowView {
            id: p.id.clone(),
            name: p.name.clone(),
            completed_at: p.status.completed_at(),
        })
        .collect();
    rows.sort_by(|a, b| match (a.completed_at, b.completed_at) {
        (Some(at_a), Some(at_b)) => at_b.cmp(&at_a).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
    rows
}
