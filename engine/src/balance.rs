use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::classify::classify;
use crate::errors::ClassifyError;
use crate::participant::{Participant, ParticipantId};
use crate::pot::distribute;
use crate::wager::Wager;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetBalance {
    pub participant_id: ParticipantId,
    pub total_won: Amount,
    pub total_lost: Amount,
}

impl NetBalance {
    pub fn zeroed(participant_id: ParticipantId) -> Self {
        Self { participant_id, total_won: Amount::ZERO, total_lost: Amount::ZERO }
    }

    pub fn net(&self) -> Amount {
        self.total_won - self.total_lost
    }
}

/// A settled wager the sweep could not classify. The rest of the
/// tournament is still computed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedWager {
    pub wager_id: String,
    pub reason: ClassifyError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalanceSheet {
    pub balances: Vec<NetBalance>,
    pub skipped: Vec<SkippedWager>,
}

/// Folds every settled wager into one net balance per participant.
///
/// Per-wager contributions are commutative sums, so input order never
/// changes the result. Anything not settled is ignored. The output holds
/// one row per roster participant, zero-activity rows included, sorted
/// net-descending with ties broken by participant id.
pub fn compute_balances(roster: &[Participant], wagers: &[Wager]) -> BalanceSheet {
    let mut totals: HashMap<ParticipantId, NetBalance> = roster
        .iter()
        .map(|p| (p.id.clone(), NetBalance::zeroed(p.id.clone())))
        .collect();
    let mut skipped = Vec::new();

    for wager in wagers.iter().filter(|w| w.is_settled()) {
        let split = match classify(wager, &wager.picks) {
            Ok(split) => split,
            Err(reason) => {
                skipped.push(SkippedWager { wager_id: wager.id.clone(), reason });
                continue;
            }
        };
        if split.is_push() {
            continue;
        }

        for share in distribute(&split.winners, &split.losers) {
            entry(&mut totals, &share.participant_id).total_won += share.profit;
        }
        for loser in &split.losers {
            entry(&mut totals, &loser.participant_id).total_lost += loser.stake;
        }
    }

    let mut balances: Vec<NetBalance> = totals.into_values().collect();
    balances.sort_by(|a, b| {
        b.net()
            .cmp(&a.net())
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });
    BalanceSheet { balances, skipped }
}

// A pick author missing from the roster still gets a row; dropping the row
// would unbalance the sheet.
fn entry<'a>(
    totals: &'a mut HashMap<ParticipantId, NetBalance>,
    id: &ParticipantId,
) -> &'a mut NetBalance {
    totals
        .entry(id.clone())
        .or_insert_with(|| NetBalance::zeroed(id.clone()))
}
