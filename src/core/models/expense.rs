use super::group::GroupId;
use super::money::Money;
use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type ExpenseId = i64;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    Equal,
    Percentage,
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SplitType::Equal => "equal",
            SplitType::Percentage => "percentage",
        };
        write!(f, "{}", s)
    }
}

/// One participant's owed share of an expense.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq)]
pub struct Split {
    pub user_id: UserId,
    #[schema(value_type = f64)]
    pub amount: Money,
    pub percentage: Option<f64>,
}

/// Caller-supplied participant of a split. `percentage` is only read for
/// percentage splits.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SplitSpec {
    pub user_id: UserId,
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Unvalidated expense as submitted by a caller.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub paid_by: UserId,
    pub split_type: SplitType,
    pub splits: Option<Vec<SplitSpec>>,
}

/// Validated expense with concrete splits, not yet assigned an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub group_id: GroupId,
    pub description: String,
    pub amount: Money,
    pub paid_by: UserId,
    pub payer_name: String,
    pub split_type: SplitType,
    pub splits: Vec<Split>,
    pub created_at: DateTime<Utc>,
}

impl ExpenseDraft {
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            group_id: self.group_id,
            description: self.description,
            amount: self.amount,
            paid_by: self.paid_by,
            payer_name: self.payer_name,
            split_type: self.split_type,
            splits: self.splits,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq)]
pub struct Expense {
    pub id: ExpenseId,
    pub group_id: GroupId,
    pub description: String,
    #[schema(value_type = f64)]
    pub amount: Money,
    pub paid_by: UserId,
    pub payer_name: String,
    pub split_type: SplitType,
    pub splits: Vec<Split>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}
