use super::money::Money;
use super::user::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type GroupId = i64;

/// A group and its members, kept sorted by user id.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<User>,
}

impl Group {
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.member(user_id).is_some()
    }

    pub fn member(&self, user_id: UserId) -> Option<&User> {
        self.members
            .binary_search_by_key(&user_id, |u| u.id)
            .ok()
            .map(|idx| &self.members[idx])
    }

    pub fn member_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.members.iter().map(|u| u.id)
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub users: Vec<User>,
    #[schema(value_type = f64)]
    pub total_expenses: Money,
}
