use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::balance::NetBalance;
use crate::participant::ParticipantId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Amount,
}

/// Reduces net balances to pairwise transfers.
///
/// Creditors and debtors are each sorted magnitude-descending (ties by
/// participant id) and matched with a two-pointer greedy sweep, so the
/// output is reproducible and at most `n - 1` transfers long for `n`
/// participants out of balance. Every transfer amount is strictly
/// positive. If the input does not sum to zero the unmatched remainder is
/// dropped when the other side exhausts.
pub fn minimize_debts(balances: &[NetBalance]) -> Vec<Transfer> {
    let mut creditors: Vec<(ParticipantId, Amount)> = balances
        .iter()
        .filter(|b| b.net().is_positive())
        .map(|b| (b.participant_id.clone(), b.net()))
        .collect();
    let mut debtors: Vec<(ParticipantId, Amount)> = balances
        .iter()
        .filter(|b| b.net().is_negative())
        .map(|b| (b.participant_id.clone(), -b.net()))
        .collect();
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut transfers = Vec::new();
    let (mut ci, mut di) = (0, 0);
    while ci < creditors.len() && di < debtors.len() {
        let amount = creditors[ci].1.min(debtors[di].1);
        transfers.push(Transfer {
            from: debtors[di].0.clone(),
            to: creditors[ci].0.clone(),
            amount,
        });
        creditors[ci].1 -= amount;
        debtors[di].1 -= amount;
        if creditors[ci].1 == Amount::ZERO {
            ci += 1;
        }
        if debtors[di].1 == Amount::ZERO {
            di += 1;
        }
    }
    transfers
}
