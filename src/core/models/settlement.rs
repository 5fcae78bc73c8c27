use super::group::GroupId;
use super::money::Money;
use super::user::UserId;
use serde::Serialize;
use utoipa::ToSchema;

/// Suggested payment: `from` pays `to` the given amount.
#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct Settlement {
    pub from_user_id: UserId,
    pub from_user_name: String,
    pub to_user_id: UserId,
    pub to_user_name: String,
    #[schema(value_type = f64)]
    pub amount: Money,
}

#[derive(Clone, Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct GroupSettlementsResponse {
    pub group_id: GroupId,
    pub group_name: String,
    pub settlements: Vec<Settlement>,
}
