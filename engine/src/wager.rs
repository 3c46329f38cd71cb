use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::participant::ParticipantId;

pub const OVER_LABEL: &str = "Over";
pub const UNDER_LABEL: &str = "Under";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WagerStatus {
    Open,
    Locked,
    Settled,
    Cancelled,
}

/// Declared wager type plus its per-type payload. `Unknown` catches any
/// unrecognized type string coming out of the store, so a bad record is
/// rejected at classification time instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WagerKind {
    SingleWinner { options: Vec<String> },
    ExactScore,
    OverUnder { line: f64 },
    #[serde(other)]
    Unknown,
}

/// Recorded result of a settled wager. Over-under outcomes carry the final
/// score; the actual total is `home + away`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Winner { winner: String },
    Score { home: u32, away: u32 },
}

/// One participant's selection on a wager. Labels cover single-winner
/// options and Over/Under; exact-score picks use a structured pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Label(String),
    Score { home: u32, away: u32 },
}

impl Selection {
    /// Normalizes a raw selection against the wager kind it belongs to.
    /// Exact-score picks may arrive as a serialized `"H-A"` string from
    /// older clients; they become a structured pair here so the classifier
    /// only ever compares structured values. Returns `None` when the string
    /// does not parse.
    pub fn normalized_for(&self, kind: &WagerKind) -> Option<Selection> {
        match (kind, self) {
            (WagerKind::ExactScore, Selection::Label(raw)) => {
                parse_score(raw).map(|(home, away)| Selection::Score { home, away })
            }
            _ => Some(self.clone()),
        }
    }
}

pub fn parse_score(s: &str) -> Option<(u32, u32)> {
    let (home, away) = s.split_once('-')?;
    let home = home.trim().parse().ok()?;
    let away = away.trim().parse().ok()?;
    Some((home, away))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub wager_id: String,
    pub participant_id: ParticipantId,
    pub selection: Selection,
    pub stake: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    pub id: String,
    #[serde(flatten)]
    pub kind: WagerKind,
    pub status: WagerStatus,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

impl Wager {
    pub fn is_settled(&self) -> bool {
        self.status == WagerStatus::Settled
    }
}
