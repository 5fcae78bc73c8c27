use crate::core::models::{Balance, Expense, Group, Money, UserBalance, UserId};
use log::debug;
use std::collections::BTreeMap;

/// Net balance per member of `group` over `expenses`.
///
/// The payer is credited the full amount and every participant is debited
/// their split. Members are reported in user id order, zero balances included.
pub fn group_balances(group: &Group, expenses: &[Expense]) -> Vec<Balance> {
    let mut net: BTreeMap<UserId, Money> = group.member_ids().map(|id| (id, Money::ZERO)).collect();

    for expense in expenses.iter().filter(|e| e.group_id == group.id) {
        *net.entry(expense.paid_by).or_insert(Money::ZERO) += expense.amount;
        for split in &expense.splits {
            *net.entry(split.user_id).or_insert(Money::ZERO) -= split.amount;
        }
    }

    debug!("Calculated balances for group {}: {:?}", group.id, net);

    group
        .members
        .iter()
        .map(|member| Balance {
            user_id: member.id,
            user_name: member.name.clone(),
            balance: net.get(&member.id).copied().unwrap_or(Money::ZERO),
        })
        .collect()
}

/// The balance of `user_id` in `group`, zero when the user has no activity.
pub fn user_balance_in_group(user_id: UserId, group: &Group, expenses: &[Expense]) -> UserBalance {
    let balance = group_balances(group, expenses)
        .into_iter()
        .find(|b| b.user_id == user_id)
        .map(|b| b.balance)
        .unwrap_or(Money::ZERO);

    UserBalance {
        group_id: group.id,
        group_name: group.name.clone(),
        balance,
    }
}

pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}
