use crate::core::errors::{ErrorKind, SplitwiseError};
use crate::core::models::{Balance, Money, Settlement};
use crate::core::settlement::settle;
use crate::tests::{balance, cents};
use std::collections::HashMap;

fn payment(from: (i64, &str), to: (i64, &str), amount_cents: i64) -> Settlement {
    Settlement {
        from_user_id: from.0,
        from_user_name: from.1.to_string(),
        to_user_id: to.0,
        to_user_name: to.1.to_string(),
        amount: cents(amount_cents),
    }
}

fn assert_settles(balances: &[Balance], settlements: &[Settlement]) {
    let mut remaining: HashMap<i64, Money> = balances.iter().map(|b| (b.user_id, b.balance)).collect();
    for s in settlements {
        assert!(s.amount.is_positive());
        assert_ne!(s.from_user_id, s.to_user_id);
        *remaining.get_mut(&s.from_user_id).unwrap() += s.amount;
        *remaining.get_mut(&s.to_user_id).unwrap() -= s.amount;
    }
    assert!(remaining.values().all(|m| m.is_zero()), "left over: {:?}", remaining);

    let nonzero = balances.iter().filter(|b| !b.balance.is_zero()).count();
    assert!(settlements.len() <= nonzero.saturating_sub(1));
}

#[test]
fn test_single_creditor_scenario() {
    let balances = vec![
        balance(1, "Alice", 6000),
        balance(2, "Bob", -3000),
        balance(3, "Carol", -3000),
    ];
    let settlements = settle(1, &balances).unwrap();
    assert_eq!(
        settlements,
        vec![
            payment((2, "Bob"), (1, "Alice"), 3000),
            payment((3, "Carol"), (1, "Alice"), 3000)
        ]
    );
    assert_settles(&balances, &settlements);
}

#[test]
fn test_percentage_scenario_settlement() {
    let balances = vec![
        balance(1, "Alice", 5000),
        balance(2, "Bob", -3000),
        balance(3, "Carol", -2000),
    ];
    let settlements = settle(1, &balances).unwrap();
    assert_eq!(
        settlements,
        vec![
            payment((2, "Bob"), (1, "Alice"), 3000),
            payment((3, "Carol"), (1, "Alice"), 2000)
        ]
    );
}

#[test]
fn test_largest_magnitudes_matched_first_with_id_tie_break() {
    let balances = vec![
        balance(4, "Dan", -4000),
        balance(2, "Bob", 3000),
        balance(3, "Carol", -4000),
        balance(1, "Alice", 5000),
    ];
    let settlements = settle(1, &balances).unwrap();
    assert_eq!(
        settlements,
        vec![
            payment((3, "Carol"), (1, "Alice"), 4000),
            payment((4, "Dan"), (2, "Bob"), 3000),
            payment((4, "Dan"), (1, "Alice"), 1000)
        ]
    );
    assert_settles(&balances, &settlements);
}

#[test]
fn test_all_zero_balances_need_no_payments() {
    let balances = vec![balance(1, "Alice", 0), balance(2, "Bob", 0)];
    assert!(settle(1, &balances).unwrap().is_empty());
    assert!(settle(1, &[]).unwrap().is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let balances = vec![
        balance(1, "A", 2500),
        balance(2, "B", 2500),
        balance(3, "C", -2500),
        balance(4, "D", -2500),
    ];
    let mut reversed = balances.clone();
    reversed.reverse();
    assert_eq!(settle(1, &balances).unwrap(), settle(1, &reversed).unwrap());
}

#[test]
fn test_many_parties_settle_within_bound() {
    let amounts = [1234, -567, 8901, -2345, -6789, 42, -476, 0, 1];
    let mut balances: Vec<Balance> = amounts
        .iter()
        .enumerate()
        .map(|(i, &a)| balance(i as i64 + 1, &format!("U{}", i + 1), a))
        .collect();
    let imbalance: i64 = amounts.iter().sum();
    balances.push(balance(100, "Last", -imbalance));

    let settlements = settle(1, &balances).unwrap();
    assert_settles(&balances, &settlements);
}

#[test]
fn test_unbalanced_ledger_is_rejected() {
    let balances = vec![balance(1, "Alice", 6000), balance(2, "Bob", -3000)];
    let err = settle(7, &balances).unwrap_err();
    match err {
        SplitwiseError::InconsistentLedger { group_id, imbalance } => {
            assert_eq!(group_id, 7);
            assert_eq!(imbalance, cents(3000));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        settle(7, &balances).unwrap_err().kind(),
        ErrorKind::InconsistentLedger
    );
}
