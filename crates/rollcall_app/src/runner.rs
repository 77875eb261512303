//! The single-writer event loop: owns the board state, drains poller
//! events, applies the reducer, and hands effects to the presenter.

use std::time::Duration;

use anyhow::{Context, Result};
use board_logging::{board_debug, board_warn};
use chrono::Utc;
use rollcall_core::{update, BoardState, Effect, Msg};
use rollcall_engine::{PollEvent, PollerConfig, PollerHandle, ProbeTarget};

use crate::config::RosterConfig;
use crate::presenter;

const EVENT_POLL: Duration = Duration::from_millis(200);

pub fn run(roster: &RosterConfig) -> Result<()> {
    let mut state = BoardState::from_roster(roster.seeds()).context("invalid roster")?;
    if state.consume_dirty() {
        presenter::render(&state.view());
    }

    let targets: Vec<ProbeTarget> = state
        .pending_targets()
        .into_iter()
        .map(|t| ProbeTarget {
            id: t.id,
            file_url: t.file_url,
        })
        .collect();
    if targets.is_empty() {
        board_warn!("Roster has no pending participants; nothing to poll");
        return Ok(());
    }

    let config = PollerConfig::with_interval(roster.poll_interval());
    let poller = PollerHandle::start(config, targets).context("starting poller")?;

    loop {
        let Some(PollEvent::TickCompleted { tick, reports }) = poller.recv_timeout(EVENT_POLL)
        else {
            continue;
        };
        board_logging::set_poll_tick(tick);
        for report in &reports {
            board_debug!("tick {}: {} -> {}", tick, report.id, report.signal);
        }

        let msg = Msg::PollCompleted {
            reports: reports.into_iter().map(map_report).collect(),
            observed_at: Utc::now(),
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;

        let mut all_completed = false;
        for effect in &effects {
            presenter::announce(effect);
            if matches!(effect, Effect::AllCompleted) {
                all_completed = true;
            }
        }
        if state.consume_dirty() {
            presenter::render(&state.view());
        }
        if all_completed {
            poller.stop();
            return Ok(());
        }
    }
}

fn map_report(report: rollcall_engine::ProbeReport) -> rollcall_core::ProbeReport {
    rollcall_core::ProbeReport {
        id: report.id,
        outcome: map_outcome(report.outcome),
    }
}

fn map_outcome(outcome: rollcall_engine::ProbeOutcome) -> rollcall_core::ProbeOutcome {
    match outcome {
        rollcall_engine::ProbeOutcome::StillPending => rollcall_core::ProbeOutcome::StillPending,
        rollcall_engine::ProbeOutcome::Completed => rollcall_core::ProbeOutcome::Completed,
        rollcall_engine::ProbeOutcome::Indeterminate => rollcall_core::ProbeOutcome::Indeterminate,
    }
}
