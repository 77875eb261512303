use std::fmt;

use chrono::{DateTime, Utc};

use crate::view_model::{self, BoardViewModel};

pub type ParticipantId = String;

/// Completion status of a single participant. The timestamp lives inside the
/// `Completed` variant, so a completed participant always has one and a
/// pending participant never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Pending,
    Completed {
        completed_at: DateTime<Utc>,
    },
}

impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionStatus::Completed { .. })
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CompletionStatus::Pending => None,
            CompletionStatus::Completed { completed_at } => Some(*completed_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub file_url: String,
    pub status: CompletionStatus,
}

/// Roster entry as supplied by startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSeed {
    pub id: ParticipantId,
    pub name: String,
    pub file_url: String,
}

/// A pending participant's probe coordinates, handed to the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTarget {
    pub id: ParticipantId,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    EmptyId,
    EmptyName { id: ParticipantId },
    DuplicateId { id: ParticipantId },
    InvalidUrl { id: ParticipantId, reason: String },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::EmptyId => write!(f, "participant with empty id"),
            RosterError::EmptyName { id } => write!(f, "participant {id} has an empty name"),
            RosterError::DuplicateId { id } => write!(f, "duplicate participant id {id}"),
            RosterError::InvalidUrl { id, reason } => {
                write!(f, "participant {id} has an invalid file url: {reason}")
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    participants: Vec<Participant>,
    dirty: bool,
}

impl BoardState {
    /// Builds the roster from startup configuration. Rejects the whole
    /// roster on the first invalid entry; nothing is deduplicated silently.
    pub fn from_roster(seeds: Vec<ParticipantSeed>) -> Result<Self, RosterError> {
        let mut participants: Vec<Participant> = Vec::with_capacity(seeds.len());
        for seed in seeds {
            if seed.id.trim().is_empty() {
                return Err(RosterError::EmptyId);
            }
            if seed.name.trim().is_empty() {
                return Err(RosterError::EmptyName { id: seed.id });
            }
            if participants.iter().any(|p| p.id == seed.id) {
                return Err(RosterError::DuplicateId { id: seed.id });
            }
            if let Err(err) = url::Url::parse(&seed.file_url) {
                return Err(RosterError::InvalidUrl {
                    id: seed.id,
                    reason: err.to_string(),
                });
            }
            participants.push(Participant {
                id: seed.id,
                name: seed.name,
                file_url: seed.file_url,
                status: CompletionStatus::Pending,
            });
        }
        Ok(Self {
            participants,
            dirty: true,
        })
    }

    pub fn count(&self) -> usize {
        self.participants.len()
    }

    pub fn completed_count(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.status.is_completed())
            .count()
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Probe coordinates for every pending participant, in roster order.
    pub fn pending_targets(&self) -> Vec<PendingTarget> {
        self.participants
            .iter()
            .filter(|p| !p.status.is_completed())
            .map(|p| PendingTarget {
                id: p.id.clone(),
                file_url: p.file_url.clone(),
            })
            .collect()
    }

    pub fn view(&self) -> BoardViewModel {
        BoardViewModel {
            total: self.count(),
            completed: self.completed_count(),
            rows: view_model::presentation_rows(&self.participants),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn all_completed(&self) -> bool {
        self.participants.iter().all(|p| p.status.is_completed())
    }

    /// Applies a Pending -> Completed transition. Returns false when the id
    /// is unknown or the participant already completed; the transition is
    /// one-directional and the original timestamp is never overwritten.
    pub(crate) fn apply_completion(&mut self, id: &str, completed_at: DateTime<Utc>) -> bool {
        let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if participant.status.is_completed() {
            return false;
        }
        participant.status = CompletionStatus::Completed { completed_at };
        self.dirty = true;
        true
    }
}
