//! Debt simplification by greedy largest-magnitude matching.
//!
//! Each round pairs the largest creditor with the largest debtor (ties go to
//! the lower user id) and settles the smaller of the two magnitudes, so every
//! round retires at least one party and the final round retires two.

use crate::core::errors::SplitwiseError;
use crate::core::models::{Balance, GroupId, Money, Settlement, UserId};
use log::{debug, error};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, PartialEq, Eq)]
struct Party<'a> {
    outstanding: Money,
    user_id: UserId,
    user_name: &'a str,
}

impl Ord for Party<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.outstanding
            .cmp(&other.outstanding)
            .then_with(|| Reverse(self.user_id).cmp(&Reverse(other.user_id)))
    }
}

impl PartialOrd for Party<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the payments that bring every balance in `balances` to zero.
///
/// Fails with [`SplitwiseError::InconsistentLedger`] when the balances do not
/// sum to zero; no partial plan is returned in that case.
pub fn settle(group_id: GroupId, balances: &[Balance]) -> Result<Vec<Settlement>, SplitwiseError> {
    let imbalance: Money = balances.iter().map(|b| b.balance).sum();
    if !imbalance.is_zero() {
        error!("Balances of group {} sum to {} instead of zero", group_id, imbalance);
        return Err(SplitwiseError::InconsistentLedger { group_id, imbalance });
    }

    let mut creditors = BinaryHeap::new();
    let mut debtors = BinaryHeap::new();
    for b in balances {
        let party = Party {
            outstanding: b.balance.abs(),
            user_id: b.user_id,
            user_name: &b.user_name,
        };
        if b.balance.is_positive() {
            creditors.push(party);
        } else if b.balance.is_negative() {
            debtors.push(party);
        }
    }

    let mut settlements = Vec::new();
    while let (Some(mut creditor), Some(mut debtor)) = (creditors.pop(), debtors.pop()) {
        let amount = creditor.outstanding.min(debtor.outstanding);
        settlements.push(Settlement {
            from_user_id: debtor.user_id,
            from_user_name: debtor.user_name.to_string(),
            to_user_id: creditor.user_id,
            to_user_name: creditor.user_name.to_string(),
            amount,
        });

        creditor.outstanding -= amount;
        debtor.outstanding -= amount;
        if creditor.outstanding.is_positive() {
            creditors.push(creditor);
        }
        if debtor.outstanding.is_positive() {
            debtors.push(debtor);
        }
    }

    debug!("Group {} settles in {} payments", group_id, settlements.len());
    Ok(settlements)
}
