use crate::{ProbeOutcome, ProbeSignal};

/// Explicit mapping from probe signal bands to outcomes.
///
/// Observed dashboard iterations disagreed on whether a failed or odd-status
/// probe means "completed" or "try again", so the mapping is data the caller
/// picks, not branching buried in the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyPolicy {
    pub on_present: ProbeOutcome,
    pub on_absent: ProbeOutcome,
    pub on_other_status: ProbeOutcome,
    pub on_timeout: ProbeOutcome,
    pub on_network_error: ProbeOutcome,
    pub on_invalid_url: ProbeOutcome,
}

impl ClassifyPolicy {
    /// Only a confirmed absence completes; everything unclear is retried
    /// next tick.
    pub fn conservative() -> Self {
        Self {
            on_present: ProbeOutcome::StillPending,
            on_absent: ProbeOutcome::Completed,
            on_other_status: ProbeOutcome::Indeterminate,
            on_timeout: ProbeOutcome::Indeterminate,
            on_network_error: ProbeOutcome::Indeterminate,
            on_invalid_url: ProbeOutcome::Indeterminate,
        }
    }

    /// Treats an unreachable resource like a deleted one. Fits deployments
    /// where completion tears the whole host down, not just the file.
    pub fn optimistic() -> Self {
        Self {
            on_timeout: ProbeOutcome::Completed,
            on_network_error: ProbeOutcome::Completed,
            ..Self::conservative()
        }
    }

    pub fn classify(&self, signal: ProbeSignal) -> ProbeOutcome {
        match signal {
            ProbeSignal::Present => self.on_present,
            ProbeSignal::Absent => self.on_absent,
            ProbeSignal::OtherStatus(_) => self.on_other_status,
            ProbeSignal::Timeout => self.on_timeout,
            ProbeSignal::NetworkError => self.on_network_error,
            ProbeSignal::InvalidUrl => self.on_invalid_url,
        }
    }
}

impl Default for ClassifyPolicy {
    fn default() -> Self {
        Self::conservative()
    }
}
