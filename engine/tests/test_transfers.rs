use std::collections::HashMap;

use tally_engine::amount::Amount;
use tally_engine::balance::NetBalance;
use tally_engine::transfers::{minimize_debts, Transfer};

fn balance(id: &str, won: i64, lost: i64) -> NetBalance {
    NetBalance {
        participant_id: id.into(),
        total_won: Amount::from_cents(won),
        total_lost: Amount::from_cents(lost),
    }
}

fn apply(balances: &[NetBalance], transfers: &[Transfer]) -> HashMap<String, i64> {
    let mut remaining: HashMap<String, i64> = balances
        .iter()
        .map(|b| (b.participant_id.clone(), b.net().cents()))
        .collect();
    for t in transfers {
        *remaining.entry(t.from.clone()).or_insert(0) += t.amount.cents();
        *remaining.entry(t.to.clone()).or_insert(0) -= t.amount.cents();
    }
    remaining
}

#[test]
fn one_creditor_two_debtors_settles_in_two_transfers() {
    let balances = vec![balance("a", 5_000, 0), balance("b", 0, 3_000), balance("c", 0, 2_000)];
    let transfers = minimize_debts(&balances);
    assert_eq!(
        transfers,
        vec![
            Transfer { from: "b".into(), to: "a".into(), amount: Amount::from_cents(3_000) },
            Transfer { from: "c".into(), to: "a".into(), amount: Amount::from_cents(2_000) },
        ]
    );
    assert!(apply(&balances, &transfers).values().all(|&c| c == 0));
}

#[test]
fn applying_transfers_zeroes_every_balance() {
    let balances = vec![
        balance("a", 7_341, 0),
        balance("b", 2_659, 1_000),
        balance("c", 0, 4_500),
        balance("d", 0, 4_500),
        balance("e", 500, 500),
    ];
    let transfers = minimize_debts(&balances);
    assert!(apply(&balances, &transfers).values().all(|&c| c == 0));
}

#[test]
fn transfer_count_stays_under_participant_count() {
    let balances = vec![
        balance("a", 6_000, 0),
        balance("b", 4_000, 0),
        balance("c", 0, 3_000),
        balance("d", 0, 3_000),
        balance("e", 0, 4_000),
        balance("f", 100, 100), // already square, not counted
    ];
    let transfers = minimize_debts(&balances);
    let out_of_balance = balances.iter().filter(|b| b.net() != Amount::ZERO).count();
    assert!(transfers.len() <= out_of_balance - 1);
    assert!(apply(&balances, &transfers).values().all(|&c| c == 0));
}

#[test]
fn every_transfer_amount_is_strictly_positive() {
    let balances = vec![
        balance("a", 1, 0),
        balance("b", 9_999, 0),
        balance("c", 0, 5_000),
        balance("d", 0, 5_000),
    ];
    let transfers = minimize_debts(&balances);
    assert!(transfers.iter().all(|t| t.amount.is_positive()));
}

#[test]
fn settled_sheet_produces_no_transfers() {
    let balances = vec![balance("a", 500, 500), balance("b", 0, 0)];
    assert!(minimize_debts(&balances).is_empty());
}

#[test]
fn equal_magnitudes_order_by_participant_id() {
    let balances = vec![
        balance("zoe", 1_000, 0),
        balance("abe", 1_000, 0),
        balance("deb", 0, 2_000),
    ];
    let transfers = minimize_debts(&balances);
    assert_eq!(transfers[0].to, "abe");
    assert_eq!(transfers[1].to, "zoe");
}

#[test]
fn output_is_deterministic_across_runs() {
    let balances = vec![
        balance("a", 3_000, 0),
        balance("b", 3_000, 0),
        balance("c", 0, 2_000),
        balance("d", 0, 2_000),
        balance("e", 0, 2_000),
    ];
    assert_eq!(minimize_debts(&balances), minimize_debts(&balances));
}

#[test]
fn unbalanced_input_drops_the_unmatched_remainder() {
    // not producible from a settled sheet, but documented behavior
    let balances = vec![balance("a", 10_000, 0), balance("b", 0, 4_000)];
    let transfers = minimize_debts(&balances);
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].amount, Amount::from_cents(4_000));
}
