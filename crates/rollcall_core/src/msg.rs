use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// One poll tick's merged probe results, stamped with the detection time.
    PollCompleted {
        reports: Vec<ProbeReport>,
        observed_at: DateTime<Utc>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Classified result of one participant's existence probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub id: crate::ParticipantId,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Resource confirmed present; the participant keeps working.
    StillPending,
    /// Resource confirmed absent; the participant finished.
    Completed,
    /// Probe failed or was ambiguous; retried next tick.
    Indeterminate,
}
