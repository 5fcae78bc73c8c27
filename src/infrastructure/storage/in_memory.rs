use crate::core::errors::SplitwiseError;
use crate::core::models::{Expense, ExpenseDraft, Group, GroupId, User, UserId};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct IdSequence {
    users: AtomicI64,
    groups: AtomicI64,
    expenses: AtomicI64,
}

fn next_id(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

/// Lock order is `groups` before `expenses`.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    groups: Arc<RwLock<BTreeMap<GroupId, Group>>>,
    expenses: Arc<RwLock<HashMap<GroupId, Vec<Expense>>>>,
    ids: Arc<IdSequence>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            groups: Arc::new(RwLock::new(BTreeMap::new())),
            expenses: Arc::new(RwLock::new(HashMap::new())),
            ids: Arc::new(IdSequence::default()),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, name: String) -> Result<User, SplitwiseError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.name == name) {
            return Err(SplitwiseError::UserNameTaken(name));
        }
        let user = User {
            id: next_id(&self.ids.users),
            name,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, SplitwiseError> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, SplitwiseError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn create_group(&self, name: String, mut members: Vec<User>) -> Result<Group, SplitwiseError> {
        members.sort_by_key(|u| u.id);
        members.dedup_by_key(|u| u.id);

        let mut groups = self.groups.write().await;
        let mut expenses = self.expenses.write().await;
        let group = Group {
            id: next_id(&self.ids.groups),
            name,
            members,
        };
        groups.insert(group.id, group.clone());
        expenses.insert(group.id, Vec::new());
        Ok(group)
    }

    async fn get_group(&self, group_id: GroupId) -> Result<Option<Group>, SplitwiseError> {
        Ok(self.groups.read().await.get(&group_id).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, SplitwiseError> {
        Ok(self.groups.read().await.values().cloned().collect())
    }

    async fn get_user_groups(&self, user_id: UserId) -> Result<Vec<Group>, SplitwiseError> {
        Ok(self
            .groups
            .read()
            .await
            .values()
            .filter(|g| g.is_member(user_id))
            .cloned()
            .collect())
    }

    async fn delete_group(&self, group_id: GroupId) -> Result<(), SplitwiseError> {
        let mut groups = self.groups.write().await;
        let mut expenses = self.expenses.write().await;
        groups
            .remove(&group_id)
            .ok_or(SplitwiseError::GroupNotFound(group_id))?;
        expenses.remove(&group_id);
        Ok(())
    }

    async fn append_expense(&self, draft: ExpenseDraft) -> Result<Expense, SplitwiseError> {
        let groups = self.groups.read().await;
        if !groups.contains_key(&draft.group_id) {
            return Err(SplitwiseError::GroupNotFound(draft.group_id));
        }
        let mut expenses = self.expenses.write().await;
        let expense = draft.into_expense(next_id(&self.ids.expenses));
        expenses
            .entry(expense.group_id)
            .or_default()
            .push(expense.clone());
        Ok(expense)
    }

    async fn get_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, SplitwiseError> {
        Ok(self
            .expenses
            .read()
            .await
            .get(&group_id)
            .cloned()
            .unwrap_or_default())
    }
}
