use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tally_engine::participant::Participant;
use tally_engine::wager::Wager;

/// Materialized tournament snapshot: the roster plus every wager with its
/// picks attached, as exported by the upstream store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub wagers: Vec<Wager>,
}

impl Tournament {
    /// Display lookup for rendering; an id with no roster entry or no name
    /// falls back rather than failing the run.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.display_name())
            .unwrap_or(id)
    }
}

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}
impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Parse(e)
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "cannot read tournament file: {}", e),
            InputError::Parse(e) => write!(f, "cannot parse tournament file: {}", e),
        }
    }
}

/// A missing or unreadable snapshot is fatal for the invocation; there is
/// no degraded partial result.
pub fn load_tournament<P: AsRef<Path>>(path: P) -> Result<Tournament, InputError> {
    let s = fs::read_to_string(path)?;
    let t: Tournament = serde_json::from_str(&s)?;
    Ok(t)
}
