use serde::{Deserialize, Serialize};

pub type ParticipantId = String;

pub const PLACEHOLDER_NAME: &str = "Unknown player";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self { id: id.into(), name: None, avatar_url: None }
    }

    pub fn with_name(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: Some(name.into()), avatar_url: None }
    }

    /// Display metadata is optional and never affects settlement.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER_NAME)
    }
}
