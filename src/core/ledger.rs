//! Expense ledger: validates a submitted expense against its group and turns
//! the requested split into concrete owed amounts.
//!
//! Every split is computed in minor units by floor division; the leftover
//! cents go to the lowest user id among the participants that carry weight, so
//! the splits always add up to the expense amount exactly.

use crate::core::constants::{MAX_DESCRIPTION_LENGTH, PERCENTAGE_SCALE, PERCENTAGE_TOLERANCE};
use crate::core::errors::SplitwiseError;
use crate::core::models::{ExpenseDraft, Group, Money, NewExpense, Split, SplitSpec, SplitType, UserId};
use crate::core::validation::{validate_amount_input, validate_string_input};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Validates `expense` against `group` and computes its splits.
///
/// Nothing is stored here; the caller appends the returned draft.
pub fn prepare_expense(
    group: &Group,
    expense: NewExpense,
    created_at: DateTime<Utc>,
) -> Result<ExpenseDraft, SplitwiseError> {
    validate_string_input("description", &expense.description, MAX_DESCRIPTION_LENGTH)?;
    let amount = validate_amount_input("amount", expense.amount)?;

    let payer = group.member(expense.paid_by).ok_or_else(|| {
        warn!("Payer {} not in group {}", expense.paid_by, group.id);
        SplitwiseError::NotGroupMember(expense.paid_by)
    })?;

    let splits = match expense.split_type {
        SplitType::Equal => {
            let participants = equal_participants(group, expense.splits.as_deref())?;
            equal_split(amount, &participants)
        }
        SplitType::Percentage => {
            let specs = expense
                .splits
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    SplitwiseError::InvalidSplit("splits are required for percentage-based expenses".to_string())
                })?;
            let percentages = validate_percentages(group, specs)?;
            percentage_split(amount, &percentages)
        }
    };

    debug!(
        "Prepared {} expense of {} in group {} with {} splits",
        expense.split_type,
        amount,
        group.id,
        splits.len()
    );

    Ok(ExpenseDraft {
        group_id: group.id,
        description: expense.description.trim().to_string(),
        amount,
        paid_by: payer.id,
        payer_name: payer.name.clone(),
        split_type: expense.split_type,
        splits,
        created_at,
    })
}

fn check_split_users<'a>(
    group: &Group,
    user_ids: impl Iterator<Item = &'a UserId>,
) -> Result<BTreeSet<UserId>, SplitwiseError> {
    let mut seen = BTreeSet::new();
    for &user_id in user_ids {
        if !group.is_member(user_id) {
            warn!("User {} in splits not in group {}", user_id, group.id);
            return Err(SplitwiseError::InvalidSplitUser(user_id));
        }
        if !seen.insert(user_id) {
            return Err(SplitwiseError::InvalidSplit(format!(
                "user {} appears more than once",
                user_id
            )));
        }
    }
    Ok(seen)
}

fn equal_participants(group: &Group, specs: Option<&[SplitSpec]>) -> Result<Vec<UserId>, SplitwiseError> {
    let participants: Vec<UserId> = match specs {
        Some(specs) if !specs.is_empty() => check_split_users(group, specs.iter().map(|s| &s.user_id))?
            .into_iter()
            .collect(),
        _ => group.member_ids().collect(),
    };
    if participants.is_empty() {
        return Err(SplitwiseError::InvalidSplit("group has no members to split between".to_string()));
    }
    Ok(participants)
}

/// Splits `amount` evenly across `participants` (sorted ascending); the
/// first participant absorbs the remainder.
pub fn equal_split(amount: Money, participants: &[UserId]) -> Vec<Split> {
    let count = participants.len() as i64;
    if count == 0 {
        return Vec::new();
    }
    let share = amount.cents() / count;
    let remainder = amount.cents() % count;
    let percentage = 100.0 / count as f64;

    participants
        .iter()
        .enumerate()
        .map(|(idx, &user_id)| Split {
            user_id,
            amount: Money::from_cents(if idx == 0 { share + remainder } else { share }),
            percentage: Some(percentage),
        })
        .collect()
}

fn validate_percentages(group: &Group, specs: &[SplitSpec]) -> Result<Vec<(UserId, f64)>, SplitwiseError> {
    check_split_users(group, specs.iter().map(|s| &s.user_id))?;

    let mut percentages = Vec::with_capacity(specs.len());
    for spec in specs {
        let pct = spec.percentage.ok_or_else(|| {
            SplitwiseError::InvalidSplit(format!("percentage missing for user {}", spec.user_id))
        })?;
        if !pct.is_finite() || pct < 0.0 {
            return Err(SplitwiseError::InvalidSplit(format!(
                "percentage for user {} must be a non-negative number",
                spec.user_id
            )));
        }
        percentages.push((spec.user_id, pct));
    }

    let total: f64 = percentages.iter().map(|(_, pct)| pct).sum();
    if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
        warn!("Percentages sum to {} in group {}", total, group.id);
        return Err(SplitwiseError::InvalidSplit(format!(
            "percentages must sum to 100, got {}",
            total
        )));
    }

    percentages.sort_by_key(|(user_id, _)| *user_id);
    Ok(percentages)
}

/// Splits `amount` by `percentages` (sorted by user id, summing to ~100).
///
/// Shares are proportional to the percentages normalised to their actual
/// total, so a total within tolerance of 100 still reconciles exactly.
pub fn percentage_split(amount: Money, percentages: &[(UserId, f64)]) -> Vec<Split> {
    let weights: Vec<i128> = percentages
        .iter()
        .map(|(_, pct)| (pct * PERCENTAGE_SCALE).round() as i128)
        .collect();
    let total_weight: i128 = weights.iter().sum();
    if total_weight <= 0 {
        return Vec::new();
    }

    let cents = amount.cents() as i128;
    let mut shares: Vec<i64> = weights.iter().map(|w| (cents * w / total_weight) as i64).collect();

    let remainder = amount.cents() - shares.iter().sum::<i64>();
    if let Some(idx) = weights.iter().position(|w| *w > 0) {
        shares[idx] += remainder;
    }

    percentages
        .iter()
        .zip(shares)
        .map(|(&(user_id, pct), share)| Split {
            user_id,
            amount: Money::from_cents(share),
            percentage: Some(pct),
        })
        .collect()
}
