use crate::{BoardState, Effect, Msg, ProbeOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BoardState, msg: Msg) -> (BoardState, Vec<Effect>) {
    let effects = match msg {
        Msg::PollCompleted {
            reports,
            observed_at,
        } => {
            let mut effects = Vec::new();
            for report in reports {
                match report.outcome {
                    ProbeOutcome::Completed => {
                        // Unknown ids and already-completed participants are
                        // ignored here; completion is terminal.
                        if state.apply_completion(&report.id, observed_at) {
                            if let Some(participant) = state.participant(&report.id) {
                                effects.push(Effect::Celebrate {
                                    id: report.id,
                                    name: participant.name.clone(),
                                    completed_at: observed_at,
                                });
                            }
                        }
                    }
                    ProbeOutcome::StillPending | ProbeOutcome::Indeterminate => {}
                }
            }
            if !effects.is_empty() && state.all_completed() {
                effects.push(Effect::AllCompleted);
            }
            effects
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
