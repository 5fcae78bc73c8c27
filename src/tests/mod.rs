mod api_tests;
mod balance_tests;
mod settlement_tests;

use crate::core::models::{Balance, Expense, ExpenseDraft, Group, GroupId, Money, User, UserId};
use crate::core::services::SplitwiseService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> SplitwiseService<InMemoryLogging, InMemoryStorage> {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    SplitwiseService::new(storage, logging)
}

pub fn group_of(id: GroupId, members: &[(UserId, &str)]) -> Group {
    let mut members: Vec<User> = members
        .iter()
        .map(|&(id, name)| User {
            id,
            name: name.to_string(),
        })
        .collect();
    members.sort_by_key(|u| u.id);
    Group {
        id,
        name: format!("Group {}", id),
        members,
    }
}

/// Alice (1), Bob (2) and Carol (3).
pub fn trip_group() -> Group {
    group_of(1, &[(1, "Alice"), (2, "Bob"), (3, "Carol")])
}

pub fn stored(draft: ExpenseDraft, id: i64) -> Expense {
    draft.into_expense(id)
}

pub fn cents(value: i64) -> Money {
    Money::from_cents(value)
}

pub fn balance(user_id: UserId, user_name: &str, amount_cents: i64) -> Balance {
    Balance {
        user_id,
        user_name: user_name.to_string(),
        balance: Money::from_cents(amount_cents),
    }
}
