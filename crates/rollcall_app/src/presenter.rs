//! Console presenter: the render-boundary collaborator.
//!
//! The dashboard proper (cards, charts, confetti) is an external renderer;
//! this module consumes the same read-only surface — the view model and the
//! transition effect stream — and prints status lines instead.

use board_logging::board_info;
use rollcall_core::{BoardViewModel, Effect};

pub fn render(view: &BoardViewModel) {
    board_info!("Board: {}/{} completed", view.completed, view.total);
    for row in &view.rows {
        match row.completed_at {
            Some(at) => board_info!("  [done] {} ({})", row.name, at.to_rfc3339()),
            None => board_info!("  [    ] {}", row.name),
        }
    }
}

pub fn announce(effect: &Effect) {
    match effect {
        Effect::Celebrate {
            name, completed_at, ..
        } => {
            board_info!(
                "\u{1F389} {} completed their task at {}",
                name,
                completed_at.to_rfc3339()
            );
        }
        Effect::AllCompleted => {
            board_info!("Everyone is done; stopping the poller");
        }
    }
}
