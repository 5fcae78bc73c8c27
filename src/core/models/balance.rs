use super::group::GroupId;
use super::money::Money;
use super::user::UserId;
use serde::Serialize;
use utoipa::ToSchema;

/// Net position of one member within a group. Positive means the group owes
/// the member.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct Balance {
    pub user_id: UserId,
    pub user_name: String,
    #[schema(value_type = f64)]
    pub balance: Money,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct UserBalance {
    pub group_id: GroupId,
    pub group_name: String,
    #[schema(value_type = f64)]
    pub balance: Money,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct GroupBalancesResponse {
    pub group_id: GroupId,
    pub group_name: String,
    pub balances: Vec<Balance>,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct UserBalancesResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub balances: Vec<UserBalance>,
}
