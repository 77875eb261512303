//! Rollcall engine: existence probes and the interval poller.
mod policy;
mod poller;
mod probe;
mod types;

pub use policy::ClassifyPolicy;
pub use poller::{PollerConfig, PollerHandle};
pub use probe::{ProbeSettings, Prober, ReqwestProber};
pub use types::{
    ParticipantId, PollEvent, ProbeError, ProbeOutcome, ProbeReport, ProbeSignal, ProbeTarget,
};
