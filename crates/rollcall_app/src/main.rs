mod config;
mod logging;
mod presenter;
mod runner;

use std::path::Path;

use anyhow::Result;

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_ROSTER_FILE.to_string());
    let roster = config::load_roster(Path::new(&path))?;

    runner::run(&roster)
}
