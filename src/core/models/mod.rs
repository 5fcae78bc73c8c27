pub mod audit;
pub mod balance;
pub mod expense;
pub mod group;
pub mod money;
pub mod settlement;
pub mod user;

pub use audit::AppLog;
pub use balance::{Balance, GroupBalancesResponse, UserBalance, UserBalancesResponse};
pub use expense::{Expense, ExpenseDraft, ExpenseId, NewExpense, Split, SplitSpec, SplitType};
pub use group::{Group, GroupId, GroupResponse};
pub use money::Money;
pub use settlement::{GroupSettlementsResponse, Settlement};
pub use user::{User, UserId};
