use crate::amount::Amount;
use crate::errors::ClassifyError;
use crate::wager::{Outcome, Pick, Selection, Wager, WagerKind, OVER_LABEL, UNDER_LABEL};

/// Partition of a settled wager's picks into winners and losers.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub winners: Vec<&'a Pick>,
    pub losers: Vec<&'a Pick>,
}

impl Classification<'_> {
    /// A push moves no money: nobody won, or no winner holds any stake.
    pub fn is_push(&self) -> bool {
        self.winners.iter().all(|p| p.stake == Amount::ZERO)
    }
}

/// Splits `picks` into winners and losers of `wager` against its recorded
/// outcome. A malformed exact-score selection fails the whole wager's
/// classification; callers skip the wager and keep processing others.
pub fn classify<'a>(wager: &Wager, picks: &'a [Pick]) -> Result<Classification<'a>, ClassifyError> {
    if !wager.is_settled() {
        return Err(ClassifyError::NotSettled { wager_id: wager.id.clone() });
    }
    let outcome = wager.outcome.as_ref().ok_or_else(|| ClassifyError::MissingOutcome {
        wager_id: wager.id.clone(),
    })?;

    for pick in picks {
        if pick.stake.is_negative() {
            return Err(ClassifyError::NegativeStake {
                wager_id: wager.id.clone(),
                participant_id: pick.participant_id.clone(),
            });
        }
    }

    let mut winners = Vec::new();
    let mut losers = Vec::new();
    for pick in picks {
        if wins(wager, outcome, pick)? {
            winners.push(pick);
        } else {
            losers.push(pick);
        }
    }
    Ok(Classification { winners, losers })
}

fn wins(wager: &Wager, outcome: &Outcome, pick: &Pick) -> Result<bool, ClassifyError> {
    match (&wager.kind, outcome) {
        (WagerKind::SingleWinner { .. }, Outcome::Winner { winner }) => {
            Ok(matches!(&pick.selection, Selection::Label(label) if label == winner))
        }
        (WagerKind::ExactScore, Outcome::Score { home, away }) => {
            match pick.selection.normalized_for(&wager.kind) {
                Some(Selection::Score { home: h, away: a }) => Ok(h == *home && a == *away),
                Some(Selection::Label(_)) => Ok(false),
                None => Err(ClassifyError::MalformedSelection {
                    wager_id: wager.id.clone(),
                    participant_id: pick.participant_id.clone(),
                    selection: describe(&pick.selection),
                }),
            }
        }
        (WagerKind::OverUnder { line }, Outcome::Score { home, away }) => {
            let total = home + away;
            let winning = if f64::from(total) > *line { OVER_LABEL } else { UNDER_LABEL };
            Ok(matches!(&pick.selection, Selection::Label(label) if label == winning))
        }
        (WagerKind::Unknown, _) => Err(ClassifyError::UnknownWagerType {
            wager_id: wager.id.clone(),
        }),
        _ => Err(ClassifyError::OutcomeMismatch {
            wager_id: wager.id.clone(),
        }),
    }
}

fn describe(selection: &Selection) -> String {
    match selection {
        Selection::Label(label) => label.clone(),
        Selection::Score { home, away } => format!("{}-{}", home, away),
    }
}
