use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Unknown wager type on wager {wager_id}")]
    UnknownWagerType { wager_id: String },
    #[error("Wager {wager_id} is not settled")]
    NotSettled { wager_id: String },
    #[error("Settled wager {wager_id} has no recorded outcome")]
    MissingOutcome { wager_id: String },
    #[error("Outcome does not match wager type on wager {wager_id}")]
    OutcomeMismatch { wager_id: String },
    #[error("Malformed selection {selection:?} by {participant_id} on wager {wager_id}")]
    MalformedSelection { wager_id: String, participant_id: String, selection: String },
    #[error("Negative stake by {participant_id} on wager {wager_id}")]
    NegativeStake { wager_id: String, participant_id: String },
}
