use crate::amount::Amount;
use crate::participant::ParticipantId;
use crate::wager::Pick;

/// One winner's cut of the losing pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub participant_id: ParticipantId,
    pub profit: Amount,
}

/// Splits the losing pool across winners in proportion to stake.
///
/// Shares are floored to whole cents and the leftover cents are handed out
/// one at a time to winners ordered stake-descending, participant-id
/// ascending, so the shares always sum to the pool exactly. Losers simply
/// forfeit their own stake; the distributor does not restate that.
pub fn distribute(winners: &[&Pick], losers: &[&Pick]) -> Vec<Share> {
    let pool: i64 = losers.iter().map(|p| p.stake.cents()).sum();
    let staked: i64 = winners.iter().map(|p| p.stake.cents()).sum();
    if staked == 0 {
        // no stake to apportion against, every profit is zero
        return winners
            .iter()
            .map(|p| Share { participant_id: p.participant_id.clone(), profit: Amount::ZERO })
            .collect();
    }

    let mut profits: Vec<i64> = winners
        .iter()
        .map(|p| (pool as i128 * p.stake.cents() as i128 / staked as i128) as i64)
        .collect();

    // Flooring loses strictly under one cent per winner, so the residual is
    // at most winners - 1 and one pass settles it.
    let mut residual = pool - profits.iter().sum::<i64>();
    let mut order: Vec<usize> = (0..winners.len()).collect();
    order.sort_by(|&a, &b| {
        winners[b]
            .stake
            .cmp(&winners[a].stake)
            .then_with(|| winners[a].participant_id.cmp(&winners[b].participant_id))
    });
    for &i in &order {
        if residual == 0 {
            break;
        }
        profits[i] += 1;
        residual -= 1;
    }

    winners
        .iter()
        .zip(profits)
        .map(|(p, cents)| Share {
            participant_id: p.participant_id.clone(),
            profit: Amount::from_cents(cents),
        })
        .collect()
}
