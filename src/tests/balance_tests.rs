use crate::core::balances::{group_balances, total_expenses, user_balance_in_group};
use crate::core::ledger::prepare_expense;
use crate::core::models::{Expense, Money, NewExpense, SplitSpec, SplitType};
use crate::tests::{balance, cents, group_of, stored, trip_group};
use chrono::Utc;

fn dinner() -> Expense {
    let draft = prepare_expense(
        &trip_group(),
        NewExpense {
            description: "dinner".to_string(),
            amount: 90.0,
            paid_by: 1,
            split_type: SplitType::Equal,
            splits: None,
        },
        Utc::now(),
    )
    .unwrap();
    stored(draft, 1)
}

fn groceries() -> Expense {
    let draft = prepare_expense(
        &trip_group(),
        NewExpense {
            description: "groceries".to_string(),
            amount: 100.0,
            paid_by: 1,
            split_type: SplitType::Percentage,
            splits: Some(vec![
                SplitSpec {
                    user_id: 1,
                    percentage: Some(50.0),
                },
                SplitSpec {
                    user_id: 2,
                    percentage: Some(30.0),
                },
                SplitSpec {
                    user_id: 3,
                    percentage: Some(20.0),
                },
            ]),
        },
        Utc::now(),
    )
    .unwrap();
    stored(draft, 2)
}

#[test]
fn test_equal_split_balances() {
    let balances = group_balances(&trip_group(), &[dinner()]);
    assert_eq!(
        balances,
        vec![
            balance(1, "Alice", 6000),
            balance(2, "Bob", -3000),
            balance(3, "Carol", -3000)
        ]
    );
}

#[test]
fn test_percentage_split_balances() {
    let balances = group_balances(&trip_group(), &[groceries()]);
    assert_eq!(
        balances,
        vec![
            balance(1, "Alice", 5000),
            balance(2, "Bob", -3000),
            balance(3, "Carol", -2000)
        ]
    );
}

#[test]
fn test_no_expenses_reports_zero_for_every_member() {
    let balances = group_balances(&trip_group(), &[]);
    assert_eq!(balances.len(), 3);
    assert!(balances.iter().all(|b| b.balance.is_zero()));
}

#[test]
fn test_fold_order_does_not_matter() {
    let forward = group_balances(&trip_group(), &[dinner(), groceries()]);
    let backward = group_balances(&trip_group(), &[groceries(), dinner()]);
    assert_eq!(forward, backward);
    assert_eq!(forward[0].balance, cents(11_000));
}

#[test]
fn test_expenses_of_other_groups_ignored() {
    let mut foreign = dinner();
    foreign.group_id = 99;
    let balances = group_balances(&trip_group(), &[foreign]);
    assert!(balances.iter().all(|b| b.balance.is_zero()));
}

#[test]
fn test_closed_ledger_over_many_expenses() {
    let group = group_of(5, &[(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")]);
    let mut expenses = Vec::new();
    let mut seed: u64 = 17;
    for id in 0..200 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let amount_cents = (seed >> 33) % 50_000 + 1;
        let payer = (seed >> 20) % 5 + 1;
        let split_type = if id % 2 == 0 {
            SplitType::Equal
        } else {
            SplitType::Percentage
        };
        let splits = match split_type {
            SplitType::Equal => None,
            SplitType::Percentage => Some(vec![
                SplitSpec {
                    user_id: payer as i64,
                    percentage: Some(12.5),
                },
                SplitSpec {
                    user_id: (payer % 5 + 1) as i64,
                    percentage: Some(33.3),
                },
                SplitSpec {
                    user_id: ((payer + 1) % 5 + 1) as i64,
                    percentage: Some(54.2),
                },
            ]),
        };
        let draft = prepare_expense(
            &group,
            NewExpense {
                description: format!("expense {}", id),
                amount: amount_cents as f64 / 100.0,
                paid_by: payer as i64,
                split_type,
                splits,
            },
            Utc::now(),
        )
        .unwrap();
        let split_total: Money = draft.splits.iter().map(|s| s.amount).sum();
        assert_eq!(split_total, draft.amount);
        expenses.push(stored(draft, id));
    }

    let balances = group_balances(&group, &expenses);
    let total: Money = balances.iter().map(|b| b.balance).sum();
    assert_eq!(total, Money::ZERO);
}

#[test]
fn test_user_balance_in_group() {
    let expenses = [dinner()];
    let bob = user_balance_in_group(2, &trip_group(), &expenses);
    assert_eq!(bob.group_id, 1);
    assert_eq!(bob.balance, cents(-3000));

    let outsider = user_balance_in_group(42, &trip_group(), &expenses);
    assert_eq!(outsider.balance, Money::ZERO);
}

#[test]
fn test_total_expenses() {
    assert_eq!(total_expenses(&[dinner(), groceries()]), cents(19_000));
    assert_eq!(total_expenses(&[]), Money::ZERO);
}
