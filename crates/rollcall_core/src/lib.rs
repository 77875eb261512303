//! Rollcall core: pure roster state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, ProbeOutcome, ProbeReport};
pub use state::{
    BoardState, CompletionStatus, Participant, ParticipantId, ParticipantSeed, PendingTarget,
    RosterError,
};
pub use update::update;
pub use view_model::{BoardViewModel, ParticipantRowView};
