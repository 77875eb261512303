use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A participant just flipped Pending -> Completed; emitted exactly once
    /// per participant, for the presentation layer's celebration.
    Celebrate {
        id: crate::ParticipantId,
        name: String,
        completed_at: DateTime<Utc>,
    },
    /// The committing tick left nobody pending; polling can stop.
    AllCompleted,
}
