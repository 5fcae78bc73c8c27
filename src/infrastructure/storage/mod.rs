use crate::core::errors::SplitwiseError;
use crate::core::models::{Expense, ExpenseDraft, Group, GroupId, User, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores a new user under a fresh id. Fails if the name is taken.
    async fn create_user(&self, name: String) -> Result<User, SplitwiseError>;
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, SplitwiseError>;
    async fn list_users(&self) -> Result<Vec<User>, SplitwiseError>;
    /// Stores a new group under a fresh id; `members` must already exist.
    async fn create_group(&self, name: String, members: Vec<User>) -> Result<Group, SplitwiseError>;
    async fn get_group(&self, group_id: GroupId) -> Result<Option<Group>, SplitwiseError>;
    async fn list_groups(&self) -> Result<Vec<Group>, SplitwiseError>;
    async fn get_user_groups(&self, user_id: UserId) -> Result<Vec<Group>, SplitwiseError>;
    /// Removes a group together with its expense history.
    async fn delete_group(&self, group_id: GroupId) -> Result<(), SplitwiseError>;
    /// Appends an expense to its group's history. Appends to one group are
    /// serialised; fails if the group no longer exists.
    async fn append_expense(&self, draft: ExpenseDraft) -> Result<Expense, SplitwiseError>;
    /// The group's expenses in recording order.
    async fn get_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, SplitwiseError>;
}

pub mod in_memory;
