use std::fmt;

use thiserror::Error;

pub type ParticipantId = String;

/// Probe coordinates for one pending participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub id: ParticipantId,
    pub file_url: String,
}

/// Raw observation band from one existence probe, before the policy maps it
/// to an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSignal {
    /// 2xx: the remote file is still there.
    Present,
    /// 404 or 410: the remote file is gone.
    Absent,
    /// Any other HTTP status.
    OtherStatus(u16),
    Timeout,
    NetworkError,
    InvalidUrl,
}

impl fmt::Display for ProbeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSignal::Present => write!(f, "present"),
            ProbeSignal::Absent => write!(f, "absent"),
            ProbeSignal::OtherStatus(code) => write!(f, "http status {code}"),
            ProbeSignal::Timeout => write!(f, "timeout"),
            ProbeSignal::NetworkError => write!(f, "network error"),
            ProbeSignal::InvalidUrl => write!(f, "invalid url"),
        }
    }
}

/// Policy verdict for one participant in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    StillPending,
    Completed,
    Indeterminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub id: ParticipantId,
    pub signal: ProbeSignal,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// All probes for one tick settled. Exactly one event per tick; a
    /// cancelled tick emits nothing.
    TickCompleted {
        tick: u64,
        reports: Vec<ProbeReport>,
    },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
}
