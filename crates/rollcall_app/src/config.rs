//! Roster configuration: the static participant list and poll interval,
//! loaded once at startup from a RON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ROSTER_FILE: &str = "roster.ron";

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    pub participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantEntry {
    pub id: String,
    pub name: String,
    pub file_url: String,
}

fn default_poll_interval_secs() -> u64 {
    5
}

impl RosterConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn seeds(&self) -> Vec<rollcall_core::ParticipantSeed> {
        self.participants
            .iter()
            .map(|entry| rollcall_core::ParticipantSeed {
                id: entry.id.clone(),
                name: entry.name.clone(),
                file_url: entry.file_url.clone(),
            })
            .collect()
    }
}

/// Reads the roster file. Id uniqueness and URL validity are checked by
/// roster construction, so a bad entry still fails startup, not a tick.
pub fn load_roster(path: &Path) -> Result<RosterConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading roster config {}", path.display()))?;
    let config: RosterConfig = ron::from_str(&content)
        .with_context(|| format!("parsing roster config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_roster(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_roster_with_explicit_interval() {
        let file = write_roster(
            r#"(
    poll_interval_secs: 10,
    participants: [
        (id: "1", name: "Jane Smith", file_url: "https://files.example.com/1.json"),
        (id: "2", name: "Mason Lee", file_url: "https://files.example.com/2.json"),
    ],
)"#,
        );

        let config = load_roster(file.path()).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.participants.len(), 2);
        assert_eq!(config.participants[0].name, "Jane Smith");

        let seeds = config.seeds();
        assert_eq!(seeds[1].id, "2");
        assert_eq!(seeds[1].file_url, "https://files.example.com/2.json");
    }

    #[test]
    fn poll_interval_defaults_to_five_seconds() {
        let file = write_roster(
            r#"(
    participants: [
        (id: "1", name: "Jane Smith", file_url: "https://files.example.com/1.json"),
    ],
)"#,
        );

        let config = load_roster(file.path()).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn malformed_roster_file_fails_loudly() {
        let file = write_roster("( participants: [ (id: \"1\") ] )");
        assert!(load_roster(file.path()).is_err());
    }

    #[test]
    fn missing_roster_file_fails_loudly() {
        assert!(load_roster(Path::new("/nonexistent/roster.ron")).is_err());
    }
}
