use crate::core::balances::{group_balances, total_expenses, user_balance_in_group};
use crate::core::constants::{EXPENSE_ADDED, GROUP_CREATED, GROUP_DELETED, MAX_NAME_LENGTH, USER_ADDED};
use crate::core::errors::SplitwiseError;
use crate::core::ledger::prepare_expense;
use crate::core::models::{
    AppLog, Expense, Group, GroupBalancesResponse, GroupId, GroupResponse, GroupSettlementsResponse, NewExpense, User,
    UserBalancesResponse, UserId,
};
use crate::core::settlement::settle;
use crate::core::validation::validate_string_input;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

pub struct SplitwiseService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> SplitwiseService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        SplitwiseService { storage, logging }
    }

    /// Records an audit entry. The mutation it describes is already stored,
    /// so a failed write is logged and does not fail the request.
    async fn audit(&self, action: &str, details: serde_json::Value, user_id: Option<UserId>) {
        if let Err(e) = self.logging.log_action(action, details, user_id).await {
            warn!("Failed to record {} audit entry: {}", action, e);
        }
    }

    async fn require_group(&self, group_id: GroupId) -> Result<Group, SplitwiseError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or(SplitwiseError::GroupNotFound(group_id))
    }

    pub async fn require_user(&self, user_id: UserId) -> Result<User, SplitwiseError> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or(SplitwiseError::UserNotFound(user_id))
    }

    async fn group_response(&self, group: Group) -> Result<GroupResponse, SplitwiseError> {
        let expenses = self.storage.get_expenses(group.id).await?;
        Ok(GroupResponse {
            id: group.id,
            name: group.name,
            users: group.members,
            total_expenses: total_expenses(&expenses),
        })
    }

    // USERS

    pub async fn add_user(&self, name: String) -> Result<User, SplitwiseError> {
        validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        let user = self.storage.create_user(name.trim().to_string()).await?;
        info!("Created user {} ({})", user.id, user.name);

        self.audit(USER_ADDED, json!({ "user_id": user.id, "name": user.name }), Some(user.id))
            .await;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, SplitwiseError> {
        self.storage.list_users().await
    }

    // GROUPS

    pub async fn create_group(&self, name: String, user_ids: Vec<UserId>) -> Result<GroupResponse, SplitwiseError> {
        validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        if user_ids.is_empty() {
            return Err(SplitwiseError::invalid_input(
                "user_ids",
                "Invalid user_ids",
                "A group needs at least one member",
            ));
        }

        let lookups = user_ids.iter().map(|&id| self.require_user(id));
        let members = futures::future::try_join_all(lookups).await?;

        let group = self.storage.create_group(name.trim().to_string(), members).await?;
        info!("Created group {} with {} members", group.id, group.members.len());

        self.audit(
            GROUP_CREATED,
            json!({
                "group_id": group.id,
                "name": group.name,
                "member_ids": group.member_ids().collect::<Vec<_>>()
            }),
            None,
        )
        .await;

        Ok(GroupResponse {
            id: group.id,
            name: group.name,
            users: group.members,
            total_expenses: Default::default(),
        })
    }

    pub async fn get_group(&self, group_id: GroupId) -> Result<GroupResponse, SplitwiseError> {
        let group = self.require_group(group_id).await?;
        self.group_response(group).await
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupResponse>, SplitwiseError> {
        let groups = self.storage.list_groups().await?;
        let mut responses = Vec::with_capacity(groups.len());
        for group in groups {
            responses.push(self.group_response(group).await?);
        }
        Ok(responses)
    }

    pub async fn delete_group(&self, group_id: GroupId) -> Result<(), SplitwiseError> {
        let group = self.require_group(group_id).await?;
        self.storage.delete_group(group_id).await?;
        info!("Deleted group {}", group_id);

        self.audit(GROUP_DELETED, json!({ "group_id": group_id, "name": group.name }), None)
            .await;
        Ok(())
    }

    // EXPENSES

    /// Validates and appends one expense to the group's history.
    pub async fn record_expense(&self, group_id: GroupId, expense: NewExpense) -> Result<Expense, SplitwiseError> {
        let group = self.require_group(group_id).await?;
        let draft = prepare_expense(&group, expense, Utc::now()).inspect_err(|e| {
            warn!("Rejected expense for group {}: {}", group_id, e);
        })?;
        let expense = self.storage.append_expense(draft).await?;
        info!(
            "Recorded expense {} of {} in group {} paid by {}",
            expense.id, expense.amount, group_id, expense.paid_by
        );

        self.audit(
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "group_id": group_id,
                "description": expense.description,
                "amount": expense.amount,
                "paid_by": expense.paid_by,
                "split_type": expense.split_type
            }),
            Some(expense.paid_by),
        )
        .await;

        Ok(expense)
    }

    pub async fn get_expenses(&self, group_id: GroupId) -> Result<Vec<Expense>, SplitwiseError> {
        self.require_group(group_id).await?;
        self.storage.get_expenses(group_id).await
    }

    // BALANCES & SETTLEMENT

    pub async fn group_balances(&self, group_id: GroupId) -> Result<GroupBalancesResponse, SplitwiseError> {
        let group = self.require_group(group_id).await?;
        let expenses = self.storage.get_expenses(group_id).await?;
        let balances = group_balances(&group, &expenses);
        Ok(GroupBalancesResponse {
            group_id: group.id,
            group_name: group.name,
            balances,
        })
    }

    pub async fn settle_group(&self, group_id: GroupId) -> Result<GroupSettlementsResponse, SplitwiseError> {
        let GroupBalancesResponse {
            group_id,
            group_name,
            balances,
        } = self.group_balances(group_id).await?;
        let settlements = settle(group_id, &balances)?;
        Ok(GroupSettlementsResponse {
            group_id,
            group_name,
            settlements,
        })
    }

    pub async fn user_balances(&self, user_id: UserId) -> Result<UserBalancesResponse, SplitwiseError> {
        let user = self.require_user(user_id).await?;
        let groups = self.storage.get_user_groups(user_id).await?;

        let mut balances = Vec::with_capacity(groups.len());
        for group in groups {
            let expenses = self.storage.get_expenses(group.id).await?;
            balances.push(user_balance_in_group(user_id, &group, &expenses));
        }

        Ok(UserBalancesResponse {
            user_id: user.id,
            user_name: user.name,
            balances,
        })
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitwiseError> {
        self.logging.get_logs().await
    }
}
